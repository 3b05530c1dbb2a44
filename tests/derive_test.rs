use std::marker::PhantomData;

use tola_seq::Element;
use tola_seq::algo::copy;

#[derive(Debug, Clone, Copy, PartialEq, Element)]
struct Rgb(u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Element)]
struct Named {
    name: String,
}

#[derive(Clone, Copy, Element)]
struct Tagged<T> {
    _tag: PhantomData<T>,
    id: u32,
}

#[derive(Clone, Copy, Element)]
enum Shade {
    Light,
    Dark(u8),
}

#[test]
fn test_derive_detects_copy() {
    assert!(<Rgb as Element>::RELOCATABLE);
    assert!(<Shade as Element>::RELOCATABLE);
    assert!(!<Named as Element>::RELOCATABLE);
    assert!(!<Rgb as Element>::BYTE_FILL);
}

#[test]
fn test_generic_derive_stays_on_element_path() {
    assert!(!<Tagged<u8> as Element>::RELOCATABLE);

    let src = [Tagged::<u8> { _tag: PhantomData, id: 4 }, Tagged { _tag: PhantomData, id: 5 }];
    let mut dst = [Tagged::<u8> { _tag: PhantomData, id: 0 }; 2];
    unsafe {
        let range = src.as_ptr_range();
        copy(range.start, range.end, dst.as_mut_ptr());
    }
    assert_eq!(dst.map(|t| t.id), [4, 5]);
}

#[test]
fn test_derived_types_flow_through_algorithms() {
    let src = [Rgb(1, 2, 3), Rgb(4, 5, 6)];
    let mut dst = [Rgb(0, 0, 0); 2];
    unsafe {
        let range = src.as_ptr_range();
        copy(range.start, range.end, dst.as_mut_ptr());
    }
    assert_eq!(dst, src);

    let names = [Named { name: "n".into() }];
    let mut out = [Named { name: String::new() }];
    unsafe {
        let range = names.as_ptr_range();
        copy(range.start, range.end, out.as_mut_ptr());
    }
    assert_eq!(out, names);

    let _ = Shade::Light;
    let _ = Shade::Dark(1);
}
