use multi_array::{make, Argument, ElementKind, ImportSource, InvalidArgument, MultiArray, Scalar, SharedArray};

fn self_err<T: std::fmt::Debug>(r: Result<T, InvalidArgument>) -> bool
{
    r.map_err(|e| e.argument()).err() == Some(Argument::SelfArg)
}

#[test]
fn null_handle_rejects_every_operation()
{
    let a = SharedArray::null();
    let src = [1u8];
    let source = ImportSource::contiguous(&src, 1).unwrap();
    assert!(self_err(a.kind()));
    assert!(self_err(a.shape()));
    assert!(self_err(a.strides()));
    assert!(self_err(a.ndim()));
    assert!(self_err(a.len()));
    assert!(self_err(a.get(0)));
    assert!(self_err(a.set(0, 1u8)));
    assert!(self_err(a.reset()));
    assert!(self_err(a.assign(&source)));
    assert!(self_err(a.export_view()));
    assert!(self_err(a.with(|m| m.len())));
    assert_eq!(
        a.get(0).unwrap_err().to_string(),
        "invalid argument: self"
    );
}

#[test]
fn handles_share_one_array()
{
    let a = make((2, 2), ElementKind::F32).unwrap();
    let b = a.clone();
    b.set((0, 0), 1.0f32).unwrap();
    b.set((0, 1), 2.0f32).unwrap();
    b.set((1, 0), 3.0f32).unwrap();
    b.set((1, 1), 4.0f32).unwrap();
    assert_eq!(a.get((1, 0)), Ok(Scalar::F32(3.)));
    a.reset().unwrap();
    assert_eq!(b.get((1, 0)), Ok(Scalar::F32(0.)));
    assert_eq!(a.shape(), Ok(vec![2, 2]));
    assert_eq!(a.strides(), Ok(vec![2, 1]));
    assert_eq!(a.kind(), Ok(ElementKind::F32));
}

#[test]
fn last_release_frees()
{
    let mut a = make(3, ElementKind::I8).unwrap();
    let mut b = a.clone();
    assert_eq!(b.reference_count(), 2);
    a.release();
    assert!(a.is_null());
    assert_eq!(b.reference_count(), 1);
    assert_eq!(b.len(), Ok(3));
    b.release();
    assert_eq!(b.reference_count(), 0);
    assert!(self_err(b.len()));
}

#[test]
fn assign_and_export()
{
    let a = SharedArray::from(MultiArray::zeros((3, 2), ElementKind::U16).unwrap());
    let col = [10i64, 20, 30];
    a.assign(&ImportSource::contiguous(&col, (3, 1)).unwrap()).unwrap();
    assert_eq!(a.get((2, 1)), Ok(Scalar::U16(30)));

    let raw = a.export_view().unwrap();
    assert_eq!(raw.byte_strides(), &[4, 2]);
    // the handle keeps the array alive and nothing writes to it below
    let view = unsafe { raw.deref_into_view() };
    assert_eq!(view.as_slice::<u16>(), Some(&[10, 10, 20, 20, 30, 30][..]));

    let copy = make((3, 2), ElementKind::F64).unwrap();
    copy.assign(&view.into()).unwrap();
    assert_eq!(copy.get((1, 0)), Ok(Scalar::F64(20.)));
}

#[test]
fn scoped_access()
{
    let a = make(4, ElementKind::U8).unwrap();
    a.with_mut(|m| m.as_typed_mut::<u8>().unwrap().fill(3)).unwrap();
    let sum = a
        .with(|m| m.as_typed::<u8>().unwrap().as_slice().iter().map(|&x| x as u32).sum::<u32>())
        .unwrap();
    assert_eq!(sum, 12);
    assert_eq!(format!("{:?}", SharedArray::null()), "SharedArray(null)");
}
