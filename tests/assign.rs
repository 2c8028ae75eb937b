#![allow(clippy::float_cmp)]

use defmac::defmac;
use itertools::Itertools;
use multi_array::{Argument, ElementKind, ImportSource, MultiArray, Scalar, TypedArray};
use multi_array_gen::array_builder::ArrayBuilder;

#[test]
fn broadcast_row()
{
    let mut a = MultiArray::zeros((3, 4), ElementKind::F64).unwrap();
    let row = [1i32, 2, 3, 4];
    a.assign(&ImportSource::contiguous(&row, (1, 4)).unwrap()).unwrap();
    for (i, j) in (0..3).cartesian_product(0..4) {
        assert_eq!(a.get((i, j)), Ok(Scalar::F64((j + 1) as f64)));
    }
}

#[test]
fn broadcast_every_axis()
{
    let mut a = TypedArray::<i16>::zeros((2, 3, 2)).unwrap();
    let one = [5u8];
    a.assign(&ImportSource::contiguous(&one, (1, 1, 1)).unwrap()).unwrap();
    assert!(a.as_slice().iter().all(|&x| x == 5));

    // middle axis broadcast
    let src = [1.5f32, -1.5, 2.5, -2.5];
    a.assign(&ImportSource::contiguous(&src, (2, 1, 2)).unwrap()).unwrap();
    assert_eq!(a.as_slice(), &[1, -1, 1, -1, 1, -1, 2, -2, 2, -2, 2, -2]);
}

#[test]
fn mismatch_leaves_destination_untouched()
{
    let mut a = ArrayBuilder::new((3, 4)).build_kind();
    let before = a.clone();
    let src = [0u8; 8];
    defmac!(assign_err shape => {
        let s = ImportSource::contiguous(&src, shape).unwrap();
        a.assign(&s).map_err(|e| e.argument())
    });
    assert_eq!(assign_err!((2, 4)), Err(Argument::Source));
    assert_eq!(assign_err!((4, 2)), Err(Argument::Source));
    assert_eq!(assign_err!(8), Err(Argument::Source));
    assert_eq!(assign_err!((1, 2, 4)), Err(Argument::Source));
    assert_eq!(a, before);
}

#[test]
fn conversions()
{
    let src = [-1.5f64, 2.7, 1e10, f64::NAN, -1e10, 0.0];
    let source = ImportSource::contiguous(&src, 6).unwrap();

    let mut a = TypedArray::<i8>::zeros(6).unwrap();
    a.assign(&source).unwrap();
    assert_eq!(a.as_slice(), &[-1, 2, 127, 0, -128, 0]);

    let mut b = TypedArray::<u32>::zeros(6).unwrap();
    b.assign(&source).unwrap();
    assert_eq!(b.as_slice(), &[0, 2, u32::MAX, 0, 0, 0]);

    let mut c = TypedArray::<bool>::zeros(6).unwrap();
    c.assign(&source).unwrap();
    assert_eq!(c.as_slice(), &[true, true, true, true, true, false]);

    let ints = [i32::MIN, -1, 0, 7, i32::MAX];
    let mut d = TypedArray::<f64>::zeros(5).unwrap();
    d.assign(&ImportSource::contiguous(&ints, 5).unwrap()).unwrap();
    assert_eq!(d.as_slice(), &[i32::MIN as f64, -1., 0., 7., i32::MAX as f64]);
}

#[test]
fn bool_source_bytes()
{
    // foreign booleans may be any non-zero byte
    let bytes = [0u8, 1, 2, 255];
    let src = unsafe { ImportSource::from_raw_parts(ElementKind::Bool, 4, &[1], bytes.as_ptr()).unwrap() };
    let mut a = TypedArray::<u8>::zeros(4).unwrap();
    a.assign(&src).unwrap();
    assert_eq!(a.as_slice(), &[0, 1, 1, 1]);
}

#[test]
fn strided_and_unaligned_source()
{
    // every second f32 of a buffer that starts one byte in
    let mut bytes = vec![0u8; 1 + 4 * 8];
    for i in 0..8 {
        let at = 1 + 4 * i;
        bytes[at..at + 4].copy_from_slice(&(i as f32).to_ne_bytes());
    }
    let src = unsafe { ImportSource::from_byte_strides(ElementKind::F32, (2, 2), &[16, 8], bytes[1..].as_ptr()) }.unwrap();
    let mut a = TypedArray::<i64>::zeros((2, 2)).unwrap();
    a.assign(&src).unwrap();
    assert_eq!(a.as_slice(), &[0, 2, 4, 6]);
}

#[test]
fn transposed_slice_source()
{
    let data = [1u64, 2, 3, 4, 5, 6];
    let src = ImportSource::from_slice(&data, (3, 2), &[1, 3]).unwrap();
    let mut a = MultiArray::zeros((3, 2), ElementKind::U64).unwrap();
    a.assign(&src).unwrap();
    assert_eq!(a.as_typed::<u64>().unwrap().as_slice(), &[1, 4, 2, 5, 3, 6]);
}

#[test]
fn zero_extent_destination()
{
    let mut a = MultiArray::zeros((0, 3), ElementKind::F32).unwrap();
    let src = [1.0f32; 3];
    assert_eq!(a.assign(&ImportSource::contiguous(&src, (1, 3)).unwrap()), Ok(()));
    let empty: [f32; 0] = [];
    assert_eq!(a.assign(&ImportSource::contiguous(&empty, (0, 3)).unwrap()), Ok(()));
    assert!(a.is_empty());
}

#[test]
fn assign_from_view()
{
    let a = ArrayBuilder::new((2, 3)).kind(ElementKind::I32).build_kind();
    let mut b = MultiArray::zeros((2, 3), ElementKind::F32).unwrap();
    b.assign(&a.view().into()).unwrap();
    assert_eq!(b, a.cast(ElementKind::F32).unwrap());

    let row = MultiArray::from_shape_vec((1, 3), vec![7u8, 8, 9]).unwrap();
    b.assign(&ImportSource::from(row.view())).unwrap();
    assert_eq!(b.get((1, 2)), Ok(Scalar::F32(9.)));
}
