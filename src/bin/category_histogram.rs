use poker_math::holdem::category_histogram;
use tracing_subscriber::EnvFilter;

const TRIALS: usize = 100_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let trials = std::env::args()
        .nth(1)
        .map(|s| s.parse().expect("Trials should be a number."))
        .unwrap_or(TRIALS);

    let mut rng = rand::rng();
    let histogram =
        category_histogram(trials, &mut rng).expect("A full deck always has seven cards to deal.");
    println!("{histogram}");
}
