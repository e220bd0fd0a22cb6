use criterion::{Criterion, criterion_group, criterion_main};
use dpc::prelude::*;
use std::hint::black_box;

fn build_script(lines: usize) -> Script {
    let timer = Objective::scoped("timer").unwrap();
    let mut script = Script::new("bench:loop/main".parse().unwrap());

    for i in 0..lines {
        let i = i32::try_from(i).unwrap();
        script.push(timer.set(Selector::all().tag("runner"), i));
        script.push(
            Execute::new()
                .as_entity(Selector::all())
                .at(Selector::current())
                .if_condition(Condition::score_matches(
                    Selector::current(),
                    &timer,
                    IntRange::at_least(i),
                ))
                .run(Function::new("./step").unwrap())
                .unwrap(),
        );
    }

    script
}

fn bench_render(c: &mut Criterion) {
    let config = ConfigModel::default();
    let mut script = build_script(500);

    c.bench_function("render 1000-line script", |b| {
        b.iter(|| black_box(script.render_with(&config).unwrap()));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
