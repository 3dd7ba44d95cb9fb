use balanced_collections::avl_tree::AvlSet;
use balanced_collections::red_black_tree::RedBlackSet;
use log::{error, info};
use simplelog::{Config, LevelFilter, SimpleLogger, TermLogger};
use std::env;
use std::process;

const KEYS: [u32; 9] = [5, 2, 9, 3, 7, 4, 8, 1, 6];
const REMOVED_KEY: u32 = 9;

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(level, Config::default()).is_err() {
        let _ = SimpleLogger::init(level, Config::default());
    }
}

fn run_avl() {
    let mut set = AvlSet::new();
    set.extend(KEYS.iter().cloned());
    println!("avl:       {}", set);

    if let Err(err) = set.remove(&REMOVED_KEY) {
        error!("avl: could not remove {}: {}", REMOVED_KEY, err);
    }
    println!("avl:       {}", set);
    info!("avl: {} keys, height {}", set.len(), set.height());
}

fn run_red_black() {
    let mut set = RedBlackSet::new();
    set.extend(KEYS.iter().cloned());
    println!("red-black: {}", set);

    if let Err(err) = set.remove(&REMOVED_KEY) {
        error!("red-black: could not remove {}: {}", REMOVED_KEY, err);
    }
    println!("red-black: {}", set);
    info!("red-black: {} keys, height {}", set.len(), set.height());
}

fn main() {
    let mut verbose = false;
    let mut variant = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "avl" | "red-black" => variant = Some(arg),
            _ => {
                eprintln!("usage: balanced-collections [avl|red-black] [-v]");
                process::exit(2);
            },
        }
    }

    init_logger(verbose);

    match variant.as_ref().map(String::as_str) {
        Some("avl") => run_avl(),
        Some("red-black") => run_red_black(),
        _ => {
            run_avl();
            run_red_black();
        },
    }
}
