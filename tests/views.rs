use multi_array::{ElementKind, MultiArray, Scalar, TypedArray};
use multi_array_gen::array_builder::ArrayBuilder;

#[test]
fn export_f32()
{
    let a = MultiArray::zeros((2, 3), ElementKind::F32).unwrap();
    let v = a.view();
    assert_eq!(v.kind(), ElementKind::F32);
    assert_eq!(v.shape(), &[2, 3]);
    assert_eq!(v.byte_strides(), &[12, 4]);
    assert_eq!(v.ndim(), 2);
    assert_eq!(v.len(), 6);
}

#[test]
fn byte_strides_for_every_kind()
{
    for &kind in &ElementKind::ALL {
        let a = MultiArray::zeros((4, 5, 6), kind).unwrap();
        let size = kind.size_of() as isize;
        assert_eq!(a.raw_view().byte_strides(), &[30 * size, 6 * size, size]);
    }
}

#[test]
fn views_share_memory()
{
    let mut a = ArrayBuilder::new((3, 3)).build::<i32>();
    let p = a.view().as_ptr();
    assert_eq!(p, a.as_ptr() as *const u8);

    a.set((2, 2), -1).unwrap();
    let m = MultiArray::from(a);
    let v = m.view();
    assert_eq!(v.as_slice::<i32>().unwrap()[8], -1);
    assert_eq!(v.get((2, 2)), Ok(Scalar::I32(-1)));
    assert_eq!(v.get((0, 1)), Ok(Scalar::I32(1)));
    assert!(v.get((3, 0)).is_err());
    assert!(v.as_slice::<u32>().is_none());
}

#[test]
fn raw_view_round_trip()
{
    let a = TypedArray::from_shape_vec((2, 2), vec![true, false, false, true]).unwrap();
    let raw = a.raw_view();
    assert_eq!(raw.kind(), ElementKind::Bool);
    assert_eq!(raw.byte_strides(), &[2, 1]);
    let v = unsafe { raw.deref_into_view() };
    assert_eq!(v.as_slice::<bool>(), Some(a.as_slice()));
    assert_eq!(v.get([1, 1]), Ok(Scalar::Bool(true)));
}

#[test]
fn empty_view()
{
    let a = MultiArray::zeros((0, 4), ElementKind::U16).unwrap();
    let v = a.view();
    assert!(v.is_empty());
    assert_eq!(v.byte_strides(), &[8, 2]);
    assert_eq!(v.as_slice::<u16>(), Some(&[][..]));
}
