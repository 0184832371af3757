use app_shell::{ActivityCoordinator, AppShell, GuardRequest};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use integration_test_utils::StaticSession;
use tokio::runtime::Builder;

const WRAPPED_BATCH_CALLS: usize = 32;

fn app_shell_criterion(c: &mut Criterion) {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("benchmark runtime should build");

    let shell = AppShell::client_template("bench").expect("client template should validate");
    let administrator = StaticSession::administrator();
    let anonymous = StaticSession::anonymous();
    let all_requirements = GuardRequest::from_names(["logged", "admin"]);
    let first_denies = GuardRequest::from_names(["logged", "admin", "notlogged"]);

    let mut guard_resolution_group = c.benchmark_group("guard_resolution");
    guard_resolution_group.bench_function("all_allowed", |b| {
        b.iter(|| {
            let outcome = runtime.block_on(
                shell
                    .resolver()
                    .resolve(black_box(&all_requirements), &administrator),
            );
            black_box(outcome)
        });
    });
    guard_resolution_group.bench_function("short_circuit_denied", |b| {
        b.iter(|| {
            let outcome = runtime.block_on(
                shell
                    .resolver()
                    .resolve(black_box(&first_denies), &anonymous),
            );
            black_box(outcome)
        });
    });
    guard_resolution_group.finish();

    let mut navigation_group = c.benchmark_group("navigation");
    navigation_group.bench_function("denied_login_redirect", |b| {
        let logged_in = StaticSession::logged_in();
        b.iter(|| {
            let navigation = runtime.block_on(shell.navigate("/accounts/login", &logged_in));
            black_box(navigation)
        });
    });
    navigation_group.finish();

    let mut activity_group = c.benchmark_group("activity");
    activity_group.bench_function("wrap_batch", |b| {
        b.iter_batched(
            ActivityCoordinator::new,
            |coordinator| {
                runtime.block_on(async {
                    for index in 0..WRAPPED_BATCH_CALLS {
                        let result: Result<usize, ()> = coordinator.wrap(async { Ok(index) }).await;
                        black_box(result.ok());
                    }
                });
                assert_eq!(coordinator.snapshot().pending, 0);
            },
            BatchSize::SmallInput,
        );
    });
    activity_group.finish();
}

criterion_group!(benches, app_shell_criterion);
criterion_main!(benches);
