use number::prelude::*;
use std::{f32, f64};

#[derive(Numeric, Clone, Copy, Debug, PartialEq)]
struct MyInt(isize);

#[derive(Numeric, Clone, Copy, Debug, PartialEq)]
struct MyFloat {
    value: f32,
}

#[test]
fn greatest_values() {
    assert_eq!(greatest::<isize>(), isize::max_value());
    assert_eq!(greatest::<i8>(), 127);
    assert_eq!(greatest::<i16>(), i16::max_value());
    assert_eq!(greatest::<i32>(), i32::max_value());
    assert_eq!(greatest::<i64>(), i64::max_value());
    assert_eq!(greatest::<i128>(), i128::max_value());
    assert_eq!(greatest::<usize>(), !0usize);
    assert_eq!(greatest::<u8>(), u8::max_value());
    assert_eq!(greatest::<u16>(), u16::max_value());
    assert_eq!(greatest::<u32>(), u32::max_value());
    assert_eq!(greatest::<u64>(), u64::max_value());
    assert_eq!(greatest::<u128>(), u128::max_value());
    assert_eq!(greatest::<f32>(), f32::INFINITY);
    assert_eq!(greatest::<f64>(), f64::INFINITY);
    assert_eq!(greatest::<MyInt>(), MyInt(isize::max_value()));
    assert_eq!(greatest::<MyFloat>(), MyFloat { value: f32::INFINITY });
}

#[test]
fn greatest_finite_values() {
    assert_eq!(greatest_finite::<isize>(), isize::max_value());
    assert_eq!(greatest_finite::<i8>(), i8::max_value());
    assert_eq!(greatest_finite::<i16>(), i16::max_value());
    assert_eq!(greatest_finite::<i32>(), i32::max_value());
    assert_eq!(greatest_finite::<i64>(), i64::max_value());
    assert_eq!(greatest_finite::<i128>(), i128::max_value());
    assert_eq!(greatest_finite::<usize>(), !0usize);
    assert_eq!(greatest_finite::<u8>(), u8::max_value());
    assert_eq!(greatest_finite::<u16>(), u16::max_value());
    assert_eq!(greatest_finite::<u32>(), u32::max_value());
    assert_eq!(greatest_finite::<u64>(), u64::max_value());
    assert_eq!(greatest_finite::<u128>(), u128::max_value());
    assert_eq!(greatest_finite::<f32>().to_bits(), f32::MAX.to_bits());
    assert_eq!(greatest_finite::<f64>().to_bits(), f64::MAX.to_bits());
    assert_eq!(greatest_finite::<MyInt>(), MyInt(isize::max_value()));
    assert_eq!(greatest_finite::<MyFloat>(), MyFloat { value: f32::MAX });
}

#[test]
fn least_values() {
    assert_eq!(least::<isize>(), isize::min_value());
    assert_eq!(least::<i8>(), -128);
    assert_eq!(least::<i16>(), i16::min_value());
    assert_eq!(least::<i32>(), i32::min_value());
    assert_eq!(least::<i64>(), i64::min_value());
    assert_eq!(least::<i128>(), i128::min_value());
    assert_eq!(least::<usize>(), 0);
    assert_eq!(least::<u8>(), 0);
    assert_eq!(least::<u16>(), 0);
    assert_eq!(least::<u32>(), 0);
    assert_eq!(least::<u64>(), 0);
    assert_eq!(least::<u128>(), 0);
    assert_eq!(least::<f32>(), f32::NEG_INFINITY);
    assert_eq!(least::<f64>(), f64::NEG_INFINITY);
    assert_eq!(least::<MyInt>(), MyInt(isize::min_value()));
    assert_eq!(least::<MyFloat>(), MyFloat { value: f32::NEG_INFINITY });
}

#[test]
fn least_finite_values() {
    assert_eq!(least_finite::<isize>(), isize::min_value());
    assert_eq!(least_finite::<i8>(), i8::min_value());
    assert_eq!(least_finite::<i16>(), i16::min_value());
    assert_eq!(least_finite::<i32>(), i32::min_value());
    assert_eq!(least_finite::<i64>(), i64::min_value());
    assert_eq!(least_finite::<i128>(), i128::min_value());
    assert_eq!(least_finite::<usize>(), 0);
    assert_eq!(least_finite::<u8>(), 0);
    assert_eq!(least_finite::<u16>(), 0);
    assert_eq!(least_finite::<u32>(), 0);
    assert_eq!(least_finite::<u64>(), 0);
    assert_eq!(least_finite::<u128>(), 0);
    assert_eq!(least_finite::<f32>().to_bits(), (-f32::MAX).to_bits());
    assert_eq!(least_finite::<f64>().to_bits(), (-f64::MAX).to_bits());
    assert_eq!(least_finite::<MyInt>(), MyInt(isize::min_value()));
    assert_eq!(least_finite::<MyFloat>(), MyFloat { value: -f32::MAX });
}

#[test]
fn float_finite_bounds_mirror() {
    assert!(greatest_finite::<f32>().is_finite());
    assert!(least_finite::<f64>().is_finite());
    assert_eq!(least_finite::<f32>(), -greatest_finite::<f32>());
    assert_eq!(least_finite::<f64>(), -greatest_finite::<f64>());
    assert!(greatest_finite::<f64>() < greatest::<f64>());
    assert!(least::<f32>() < least_finite::<f32>());
}

fn min<T>(xs: &[T]) -> T
where
    T: Numeric + PartialOrd,
    T::Repr: Real,
{
    let mut min = greatest::<T>();
    for &x in xs {
        if x < min {
            min = x;
        }
    }
    min
}

#[test]
fn slice_min() {
    assert_eq!(min(&[1u32, 2, 3]), 1);
    assert_eq!(min::<u32>(&[]), greatest::<u32>());
    assert_eq!(min(&[1i32, 3, 2]), 1);
    assert_eq!(min::<i32>(&[]), 2147483647);

    #[derive(Numeric, Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Celsius(f32);
    assert_eq!(min(&[Celsius(1.5)]), Celsius(1.5));
    assert_eq!(min::<Celsius>(&[]), Celsius(f32::INFINITY));
}
