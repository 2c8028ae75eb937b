#![cfg(feature = "serde")]

use multi_array::{ElementKind, MultiArray, Scalar};
use multi_array_gen::array_builder::ArrayBuilder;

#[test]
fn serial_many_dim_serde()
{
    {
        let a = MultiArray::from_shape_vec(3, vec![2.72f32, 1., 2.]).unwrap();
        let serial = serde_json::to_string(&a).unwrap();
        println!("Encode {:?} => {:?}", a, serial);
        assert_eq!(serial, r#"{"v":1,"dim":[3],"data":{"F32":[2.72,1.0,2.0]}}"#);
        let res = serde_json::from_str::<MultiArray>(&serial);
        println!("{:?}", res);
        assert_eq!(a, res.unwrap());
    }

    {
        let text = r#"{"v":1,"dim":[2,3],"data":{"I16":[3,1,2,-3,4,7]}}"#;
        let b = serde_json::from_str::<MultiArray>(text).unwrap();
        assert_eq!(b.kind(), ElementKind::I16);
        assert_eq!(b.get((1, 0)), Ok(Scalar::I16(-3)));
    }

    for &kind in &ElementKind::ALL {
        let a = ArrayBuilder::new((2, 1, 3)).kind(kind).build_kind();
        let serial = serde_json::to_string(&a).unwrap();
        let res = serde_json::from_str::<MultiArray>(&serial).unwrap();
        assert_eq!(a, res);
    }
}

#[test]
fn serial_wrong_count_serde()
{
    // one element too few
    let text = r#"{"v":1,"dim":[2,3],"data":{"F64":[3,1,2.2,3.1,4]}}"#;
    let arr = serde_json::from_str::<MultiArray>(text);
    println!("{:?}", arr);
    assert!(arr.is_err());

    let text = r#"{"v":2,"dim":[1],"data":{"U8":[0]}}"#;
    assert!(serde_json::from_str::<MultiArray>(text).is_err());

    let text = r#"{"v":1,"dim":[],"data":{"U8":[]}}"#;
    assert!(serde_json::from_str::<MultiArray>(text).is_err());

    let text = r#"{"v":1,"dim":[1],"data":{"C64":[0]}}"#;
    assert!(serde_json::from_str::<MultiArray>(text).is_err());
}

#[test]
fn kinds_and_scalars_serde()
{
    let kind = serde_json::to_string(&ElementKind::U32).unwrap();
    assert_eq!(kind, r#""U32""#);
    assert_eq!(serde_json::from_str::<ElementKind>(&kind).unwrap(), ElementKind::U32);

    let x = serde_json::to_string(&Scalar::Bool(true)).unwrap();
    assert_eq!(x, r#"{"Bool":true}"#);
    assert_eq!(serde_json::from_str::<Scalar>(&x).unwrap(), Scalar::Bool(true));
}
