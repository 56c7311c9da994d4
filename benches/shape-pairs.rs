use criterion::*;
use geo::Rect;
use geo_collide::Shape;

#[path = "utils/random.rs"]
mod random;
use rand::{thread_rng, Rng};
use random::*;

const BBOX: [f64; 2] = [1024., 1024.];

fn random_shape<R: Rng>(rng: &mut R, bbox: Rect<f64>) -> Shape<f64> {
    match rng.gen_range(0..4) {
        0 => uniform_point(rng, bbox).into(),
        1 => uniform_line_with_length(rng, bbox, 64.).into(),
        2 => uniform_circle(rng, bbox, 64.).into(),
        _ => {
            let corner = uniform_point(rng, bbox);
            Rect::new(corner, corner + (64., 64.).into()).into()
        }
    }
}

fn all_pairs(c: &mut Criterion) {
    const NUM_SHAPES: usize = 512;
    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);

    let shapes: Vec<_> = (0..NUM_SHAPES)
        .map(|_| random_shape(&mut thread_rng(), bbox))
        .collect();
    c.bench_function("All pairs - mixed random shapes", |b| {
        b.iter(|| {
            let mut count = 0;
            for (i, s1) in shapes.iter().enumerate() {
                for s2 in shapes[i + 1..].iter() {
                    if black_box(s1.intersects(s2)) {
                        count += 1;
                    }
                }
            }
            count
        })
    });
}

criterion_group!(pairs, all_pairs);
criterion_main!(pairs);
