use criterion::{Criterion, criterion_group, criterion_main};
use retrodesk_core::{Point, Size, Viewport};
use retrodesk_windowing::{DesktopManager, HitRegion, PanelSpec, clamp_position};
use std::hint::black_box;

fn bench_pointer_move(c: &mut Criterion) {
    let specs = vec![PanelSpec::new(
        "player",
        "Player",
        Size::new(420.0, 180.0),
        Point::new(50.0, 150.0),
        10,
    )];
    c.bench_function("pointer_move_1000", |b| {
        b.iter(|| {
            let mut desk = DesktopManager::new(&specs, Viewport::new(1280.0, 800.0))
                .expect("valid catalog");
            desk.open("player");
            desk.pointer_down("player", Point::new(60.0, 155.0), HitRegion::TitleBar);
            for step in 0..1000u32 {
                let offset = f64::from(step);
                desk.pointer_move(black_box(Point::new(offset * 3.0, offset * 2.0)));
            }
            desk.pointer_up();
        });
    });
}

fn bench_clamp(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 800.0);
    let size = Size::new(420.0, 180.0);
    c.bench_function("clamp_position", |b| {
        b.iter(|| {
            clamp_position(
                black_box(Point::new(1800.0, -250.0)),
                black_box(size),
                black_box(viewport),
            )
        });
    });
}

criterion_group!(benches, bench_pointer_move, bench_clamp);
criterion_main!(benches);
