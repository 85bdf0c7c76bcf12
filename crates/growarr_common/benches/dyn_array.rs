use criterion::{black_box, criterion_group, criterion_main, Criterion};

use growarr_common::{collections::*, dyn_array};

fn dyn_array_new(c: &mut Criterion) {
    c.bench_function("DynamicArray::new(0)", |b| b.iter(|| {
        DynamicArray::<u32>::new(0)
    }));
    c.bench_function("Vec::new", |b| b.iter(|| {
        Vec::<u32>::new()
    }));
    c.bench_function("DynamicArray::new(64)", |b| b.iter(|| {
        DynamicArray::<u32>::new(black_box(64))
    }));
    c.bench_function("vec![0; 64]", |b| b.iter(|| {
        vec![0u32; black_box(64)]
    }));
}

fn dyn_array_set(c: &mut Criterion) {
    c.bench_function("DynamicArray::set(100) append", |b| b.iter(|| {
        let mut arr = DynamicArray::<u32>::new(0);
        for i in 0..100 {
            arr.set(i, i as usize);
        }
        arr
    }));
    c.bench_function("Vec::push(100)", |b| b.iter(|| {
        let mut arr = Vec::<u32>::new();
        for i in 0..100 {
            arr.push(i);
        }
        arr
    }));
    c.bench_function("DynamicArray::set(100) strided", |b| b.iter(|| {
        let mut arr = DynamicArray::<u32>::new(0);
        for i in 0..100 {
            arr.set(i, i as usize * 4);
        }
        arr
    }));
}

fn dyn_array_resize(c: &mut Criterion) {
    c.bench_function("DynamicArray::resize(1000)", |b| b.iter(|| {
        let mut arr = DynamicArray::<u32>::new(0);
        arr.resize(black_box(1000));
        arr
    }));
    c.bench_function("Vec::resize(1000)", |b| b.iter(|| {
        let mut arr = Vec::<u32>::new();
        arr.resize(black_box(1000), 0);
        arr
    }));
    c.bench_function("DynamicArray::resize shrink-grow", |b| {
        let mut arr = DynamicArray::<u32>::new(1000);
        b.iter(|| {
            arr.resize(black_box(10));
            arr.resize(black_box(1000));
        })
    });
}

fn dyn_array_clone(c: &mut Criterion) {
    let arr = dyn_array![5u32; 1000];
    c.bench_function("DynamicArray::clone(1000)", |b| b.iter(|| {
        arr.clone()
    }));
    let mut target = DynamicArray::<u32>::new(0);
    c.bench_function("DynamicArray::clone_from(1000)", |b| b.iter(|| {
        target.clone_from(&arr);
    }));

    let vbuf = vec![5u32; 1000];
    c.bench_function("Vec::clone(1000)", |b| b.iter(|| {
        vbuf.clone()
    }));
}

fn dyn_array_index(c: &mut Criterion) {
    let arr = dyn_array![5; 100];
    c.bench_function("DynamicArray::index(100)", |b| b.iter(|| {
        for i in 0..100 {
            black_box(arr[i]);
        }
    }));
    c.bench_function("DynamicArray::get(100)", |b| b.iter(|| {
        for i in 0..100 {
            let _ = black_box(arr.get(i));
        }
    }));
    c.bench_function("ArrayIterator(100)", |b| b.iter(|| {
        let mut it = arr.begin();
        while it != arr.end() {
            black_box(*it);
            it.increment();
        }
    }));

    let vbuf = vec![5; 100];
    c.bench_function("Vec::index(100)", |b| b.iter(|| {
        for i in 0..100 {
            black_box(vbuf[i]);
        }
    }));
}

criterion_group!(dyn_array_benches,
    dyn_array_new,
    dyn_array_set,
    dyn_array_resize,
    dyn_array_clone,
    dyn_array_index
);
criterion_main!(dyn_array_benches);
