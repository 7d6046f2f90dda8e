//! Trains a three-class flower classifier from a comma-separated dataset.
//!
//! Each line must hold four features and a numeric class label (0, 1 or 2):
//!
//! ```text
//! 5.1,3.5,1.4,0.2,0
//! ```
//!
//! The dataset path is taken from the first argument, defaulting to
//! `iris.data` in the working directory.

extern crate rand;
extern crate synapses;

use rand::{Rng, SeedableRng, StdRng};
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process;

use synapses::mlp::Shape;
use synapses::trainer::{Logging, StopCondition, Trainer};

const EPOCHS: usize = 100_000;
const LEARNING_RATE: f64 = 0.1;
const TRAIN_ROWS: usize = 105;
const FEATURES: usize = 4;
const CLASSES: usize = 3;

type Sample = (Vec<f64>, Vec<f64>);

/// Reads the dataset, one-hot encoding the trailing class label. Lines that
/// do not parse as five comma-separated numbers are skipped.
fn read_dataset(path: &str) -> Vec<Sample> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            println!("Missing input file {}: {}", path, err);
            process::exit(1);
        }
    };

    let mut samples = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let values: Vec<f64> = line.trim()
            .split(',')
            .filter_map(|field| field.parse().ok())
            .collect();
        if values.len() != FEATURES + 1 {
            continue;
        }
        let class = values[FEATURES] as usize;
        if class >= CLASSES {
            continue;
        }
        let mut label = vec![0.0; CLASSES];
        label[class] = 1.0;
        samples.push((values[..FEATURES].to_vec(), label));
    }
    samples
}

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "iris.data".to_string());
    let mut samples = read_dataset(&path);
    println!("Read {} samples from {}.", samples.len(), path);
    if samples.len() <= TRAIN_ROWS {
        println!("Need more than {} samples to split off a test set.", TRAIN_ROWS);
        process::exit(1);
    }

    let mut shuffler: StdRng = SeedableRng::from_seed(&[0usize][..]);
    shuffler.shuffle(&mut samples);
    let (train, test) = samples.split_at(TRAIN_ROWS);

    let mut mlp = Trainer::new(Shape::new(FEATURES, &[7, 3], CLASSES).unwrap())
        .learning_rate(LEARNING_RATE)
        .logging(Logging::Epochs(10_000))
        .stop_condition(StopCondition::Epochs(EPOCHS))
        .train(train)
        .unwrap();

    let mut correct = 0;
    for &(ref features, ref label) in test {
        let close = mlp.predict(features)
            .iter()
            .zip(label.iter())
            .all(|(p, l)| (p - l).abs() < 0.1);
        if close {
            correct += 1;
        }
    }
    println!(
        "Test set results: {} of {} predictions within 0.1 of the label",
        correct,
        test.len()
    );
}
