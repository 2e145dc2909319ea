use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use structopt::StructOpt;

use std::time;

use oset::OSet;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "gets", default_value = "1000000")] // default 1M
    gets: usize,
}

fn main() {
    let opts = Opt::from_args();
    let seed = opts.seed.unwrap_or_else(random);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: OSet<u64> = OSet::new();

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        index.insert(rng.gen::<u64>());
    }

    println!("loaded {} items in {:?}", opts.loads, start.elapsed());

    let start = time::Instant::now();
    let mut hits = 0;
    for _i in 0..opts.gets {
        if index.contains(&rng.gen::<u64>()) {
            hits += 1;
        }
    }

    println!("got {} items, {} hits, in {:?}", opts.gets, hits, start.elapsed());

    let start = time::Instant::now();
    let mut n = 0;
    for _key in index.iter() {
        n += 1;
    }
    println!("iterated {} items in {:?}", n, start.elapsed());

    let start = time::Instant::now();
    for _i in 0..1_000 {
        index.random(&mut rng);
    }
    println!("sampled 1000 random items in {:?}", start.elapsed());

    index.validate().unwrap();
    println!(
        "validated len:{} height:{} rotations:{}",
        index.len(),
        index.height(),
        index.n_rotations()
    );
}
