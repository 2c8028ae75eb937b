#![feature(test)]

extern crate test;
use test::black_box;
use test::Bencher;

use multi_array::{ElementKind, ImportSource, MultiArray};
use multi_array_gen::array_builder::ArrayBuilder;

#[bench]
fn zeros_f64(bench: &mut Bencher)
{
    bench.iter(|| MultiArray::zeros((128, 128), ElementKind::F64))
}

#[bench]
fn assign_same_kind(bench: &mut Bencher)
{
    let src = ArrayBuilder::new((128, 128)).build::<f64>();
    let mut a = MultiArray::zeros((128, 128), ElementKind::F64).unwrap();
    bench.iter(|| a.assign(&src.view().into()))
}

#[bench]
fn assign_i32_to_f32(bench: &mut Bencher)
{
    let src = ArrayBuilder::new((128, 128)).build::<i32>();
    let mut a = MultiArray::zeros((128, 128), ElementKind::F32).unwrap();
    bench.iter(|| a.assign(&src.view().into()))
}

#[bench]
fn assign_broadcast_row(bench: &mut Bencher)
{
    let row = vec![1u8; 128];
    let mut a = MultiArray::zeros((128, 128), ElementKind::I64).unwrap();
    bench.iter(|| a.assign(&ImportSource::contiguous(&row, (1, 128)).unwrap()))
}

#[bench]
fn assign_eight_axes(bench: &mut Bencher)
{
    let shape = [2, 2, 4, 4, 4, 4, 4, 4];
    let src = ArrayBuilder::new(shape).build::<u16>();
    let mut a = MultiArray::zeros(shape, ElementKind::F64).unwrap();
    bench.iter(|| a.assign(&src.view().into()))
}

#[bench]
fn get_set(bench: &mut Bencher)
{
    let mut a = MultiArray::zeros((64, 64), ElementKind::I32).unwrap();
    bench.iter(|| {
        for i in 0..64 {
            a.set((i, black_box(i)), i as i32).unwrap();
        }
        a.get((63, 63))
    })
}
