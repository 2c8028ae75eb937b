use quickcheck::{quickcheck, TestResult};

use multi_array::{indices, ElementKind, ImportSource, MultiArray, Scalar, TypedArray, MAX_RANK};

/// Turn arbitrary bytes into a small shape with between 1 and MAX_RANK axes.
fn small_shape(seed: &[u8]) -> Vec<usize>
{
    let mut shape: Vec<usize> = seed.iter().take(MAX_RANK).map(|&x| (x % 4) as usize).collect();
    if shape.is_empty() {
        shape.push(3);
    }
    shape
}

quickcheck! {
    fn set_then_get(seed: Vec<u8>, pick: usize, value: i64) -> TestResult {
        let shape = small_shape(&seed);
        let mut a = MultiArray::zeros(&shape, ElementKind::I64).unwrap();
        if a.is_empty() {
            return TestResult::discard();
        }
        let ix = indices(&shape).unwrap().nth(pick % a.len()).unwrap();
        a.set(ix, value).unwrap();
        TestResult::from_bool(a.get(ix) == Ok(Scalar::I64(value))
            && a.as_typed::<i64>().unwrap().as_slice().iter().filter(|&&x| x != 0).count() <= 1)
    }

    fn out_of_bounds_is_rejected(seed: Vec<u8>, axis: usize) -> bool {
        let shape = small_shape(&seed);
        let a = MultiArray::zeros(&shape, ElementKind::U8).unwrap();
        let mut ix = vec![0; shape.len()];
        let axis = axis % shape.len();
        ix[axis] = shape[axis];
        a.get(ix).is_err()
    }

    fn strides_are_row_major(seed: Vec<u8>) -> bool {
        let shape = small_shape(&seed);
        let a = MultiArray::zeros(&shape, ElementKind::F32).unwrap();
        let s = a.strides();
        s[shape.len() - 1] == 1
            && (0..shape.len() - 1).all(|i| s[i] == s[i + 1] * shape[i + 1] as isize)
    }

    fn reset_clears(seed: Vec<u8>, values: Vec<f64>) -> bool {
        let shape = small_shape(&seed);
        let mut a = MultiArray::zeros(&shape, ElementKind::F64).unwrap();
        for (ix, &v) in indices(&shape).unwrap().zip(&values) {
            a.set(ix, v).unwrap();
        }
        a.reset();
        a == MultiArray::zeros(&shape, ElementKind::F64).unwrap()
    }

    fn broadcast_matches_indexing(seed: Vec<u8>, mask: u8) -> bool {
        let shape = small_shape(&seed);
        // collapse the source to length 1 on the axes picked by `mask`
        let src_shape: Vec<usize> = shape
            .iter()
            .enumerate()
            .map(|(i, &d)| if mask & (1 << i) != 0 { 1 } else { d })
            .collect();
        let src = TypedArray::from_shape_vec(
            &src_shape,
            (0..src_shape.iter().product::<usize>() as i32).collect(),
        ).unwrap();
        let mut dst = MultiArray::zeros(&shape, ElementKind::F64).unwrap();
        dst.assign(&ImportSource::from(src.view())).unwrap();

        indices(&shape).unwrap().all(|ix| {
            let src_ix: Vec<usize> = ix
                .slice()
                .iter()
                .zip(&src_shape)
                .map(|(&i, &d)| if d == 1 { 0 } else { i })
                .collect();
            dst.get(ix) == Ok(Scalar::F64(src.get(src_ix).unwrap() as f64))
        })
    }
}
