mod common;

use common::{List, Tracked, bidi, tracked};
use tola_seq::algo::*;
use tola_seq::category::ReadCursor;

// =============================================================================
// copy family
// =============================================================================

#[test]
fn test_copy_first_five() {
    let src = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut dst = [0; 5];
    let end = unsafe {
        let first = src.as_ptr();
        copy(first, first.add(5), dst.as_mut_ptr())
    };
    assert_eq!(dst, [1, 2, 3, 4, 5]);
    assert_eq!(end, dst.as_mut_ptr_range().end);
}

#[test]
fn test_copy_empty_range_returns_result() {
    let src: [u64; 0] = [];
    let mut dst = [9u64; 2];
    let out = dst.as_mut_ptr();
    let end = unsafe { copy(src.as_ptr(), src.as_ptr(), out) };
    assert_eq!(end, out);
    assert_eq!(dst, [9, 9]);
}

#[test]
fn test_copy_clones_owning_elements() {
    let src: Vec<String> = (0..4).map(|i| i.to_string()).collect();
    let mut dst = vec![String::new(); 4];
    unsafe {
        let range = src.as_ptr_range();
        copy(range.start, range.end, dst.as_mut_ptr());
    }
    assert_eq!(src, dst);
}

#[test]
fn test_copy_between_forward_lists() {
    let mut src = List::new(["a", "b", "c"].map(String::from));
    let mut dst = List::new(vec![String::new(); 3]);
    let end = unsafe { copy(src.begin(), src.end(), dst.begin()) };
    assert!(end == dst.end());
    assert_eq!(dst.values(), ["a", "b", "c"].iter().collect::<Vec<_>>());
}

#[test]
fn test_copy_backward_shifts_right() {
    let mut buf = [1, 2, 3, 4, 5, 0, 0];
    let start = unsafe {
        let base = buf.as_mut_ptr();
        copy_backward(base as *const i32, base.add(5) as *const i32, base.add(7))
    };
    assert_eq!(start, unsafe { buf.as_mut_ptr().add(2) });
    assert_eq!(buf, [1, 2, 1, 2, 3, 4, 5]);
}

#[test]
fn test_copy_backward_stepwise_matches_block() {
    let mut block: Vec<String> = ["p", "q", "r", "", ""].map(String::from).to_vec();
    let mut stepwise = block.clone();
    unsafe {
        let base = block.as_mut_ptr();
        copy_backward(base, base.add(3), base.add(5));
        let (first, _) = bidi(&mut stepwise);
        let mut last = first.clone();
        let mut result = first.clone();
        tola_seq::category::advance(&mut last, 3);
        tola_seq::category::advance(&mut result, 5);
        copy_backward(first, last, result);
    }
    assert_eq!(block, ["p", "q", "p", "q", "r"]);
    assert_eq!(stepwise, block);
}

#[test]
fn test_copy_if_and_copy_n() {
    let src = [1, 2, 3, 4, 5, 6];
    let mut evens = [0; 3];
    let end = unsafe {
        let range = src.as_ptr_range();
        copy_if(range.start, range.end, evens.as_mut_ptr(), |v| v % 2 == 0)
    };
    assert_eq!(evens, [2, 4, 6]);
    assert_eq!(end, evens.as_mut_ptr_range().end);

    let mut list = List::new([7u8, 8, 9]);
    let mut out = [0u8; 2];
    let (rest, _) = unsafe { copy_n(list.begin(), 2, out.as_mut_ptr()) };
    assert_eq!(out, [7, 8]);
    assert_eq!(unsafe { *rest.get() }, 9);
}

// =============================================================================
// move family
// =============================================================================

#[test]
fn test_move_over_bidirectional_cursors() {
    let mut src = tracked([1, 2, 3]);
    let mut dst = tracked([0, 0, 0]);
    let before = Tracked::live();
    unsafe {
        let (first, last) = bidi(&mut src);
        let (out, _) = bidi(&mut dst);
        move_range(first, last, out);
    }
    assert_eq!(Tracked::live(), before);
    assert_eq!(dst, tracked([1, 2, 3]));
    assert!(src.iter().all(|t| t.0 == 0));
}

// =============================================================================
// comparison family
// =============================================================================

#[test]
fn test_equal_across_cursor_kinds() {
    let mut list = List::new([3, 1, 4, 1, 5]);
    let buf = [3, 1, 4, 1, 5];
    assert!(unsafe { equal(list.begin(), list.end(), buf.as_ptr()) });

    let other = [3, 1, 4, 1, 6];
    let (at, in_other) = unsafe { mismatch(list.begin(), list.end(), other.as_ptr()) };
    assert_eq!(unsafe { *at.get() }, 5);
    assert_eq!(in_other, unsafe { other.as_ptr().add(4) });
}

#[test]
fn test_equal_by_predicate() {
    let a = ["Alpha", "BETA"];
    let b = ["alpha", "beta"];
    let same = unsafe {
        let range = a.as_ptr_range();
        equal_by(range.start, range.end, b.as_ptr(), |x, y| x.eq_ignore_ascii_case(y))
    };
    assert!(same);
}

#[test]
fn test_lexicographical_compare_forward_and_random_access() {
    let mut short = List::new([1, 2]);
    let mut long = List::new([1, 2, 0]);
    assert!(unsafe { lexicographical_compare(short.begin(), short.end(), long.begin(), long.end()) });
    assert!(!unsafe { lexicographical_compare(long.begin(), long.end(), short.begin(), short.end()) });

    let a = [2.0, 1.0];
    let b = [2.0, 3.0];
    let (ra, rb) = (a.as_ptr_range(), b.as_ptr_range());
    assert!(unsafe { lexicographical_compare(ra.start, ra.end, rb.start, rb.end) });
    assert!(!unsafe { lexicographical_compare_by(ra.start, ra.end, rb.start, rb.end, |x, y| x > y) });
}

// =============================================================================
// fill family
// =============================================================================

#[test]
fn test_fill_six_ints() {
    let mut buf = [0i32; 6];
    unsafe {
        let range = buf.as_mut_ptr_range();
        fill(range.start, range.end, &7);
    }
    assert_eq!(buf, [7; 6]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Byte(u8);

tola_seq::element!(Byte);

#[test]
fn test_byte_fill_matches_element_path() {
    let mut raw = [0u8; 5];
    let mut wrapped = [Byte(0); 5];
    unsafe {
        fill_n(raw.as_mut_ptr(), 5, &0xAB);
        fill_n(wrapped.as_mut_ptr(), 5, &Byte(0xAB));
    }
    assert_eq!(raw, [0xAB; 5]);
    assert_eq!(wrapped.map(|b| b.0), raw);
}

#[test]
fn test_fill_forward_list() {
    let mut list = List::new(vec![String::new(); 3]);
    unsafe { fill(list.begin(), list.end(), &"z".to_string()) };
    assert!(list.values().iter().all(|s| *s == "z"));
}

// =============================================================================
// swap
// =============================================================================

#[test]
fn test_swap_ranges_on_lists() {
    let mut a = List::new([1, 2]);
    let mut b = List::new([8, 9]);
    let end = unsafe { swap_ranges(a.begin(), a.end(), b.begin()) };
    assert!(end == b.end());
    assert_eq!(a.values(), [&8, &9]);
    assert_eq!(b.values(), [&1, &2]);
}
