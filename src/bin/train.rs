use csv::ReaderBuilder;
use entropy_tree::data::Dataset;
use entropy_tree::metrics::confusion::ClassificationMetrics;
use entropy_tree::trees::{DecisionTreeClassifier, TreeParams};
use entropy_tree::TreeError;
use std::env;
use std::error::Error;
use tracing::info;

const USAGE: &str = "usage: train-tree <file.csv> [max_depth|unlimited] [train_size] [seed]";

/// Reads a CSV file whose header names the attributes; the last column holds the label.
fn read_file_classification(file_path: &str) -> entropy_tree::Result<Dataset> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(file_path)?;

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(TreeError::InvalidInput(
            "expected at least one attribute column and a label column".into(),
        ));
    }
    let dimension = headers.len() - 1;
    let attribute_names: Vec<String> = headers.iter().take(dimension).map(String::from).collect();
    for name in &attribute_names {
        info!(header = %name, "header loaded");
    }

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result?;
        let row = record
            .iter()
            .take(dimension)
            .map(|value| parse_cell(value, line))
            .collect::<entropy_tree::Result<Vec<_>>>()?;
        let label = record
            .get(dimension)
            .ok_or_else(|| TreeError::InvalidInput(format!("row {} has no label", line)))?;

        rows.push(row);
        labels.push(parse_cell(label, line)?);
    }

    Dataset::from_rows(&attribute_names, rows, labels)
}

fn parse_cell(value: &str, line: usize) -> entropy_tree::Result<i64> {
    value.trim().parse::<i64>().map_err(|err| {
        TreeError::InvalidInput(format!("row {}: can't parse '{}': {}", line, value, err))
    })
}

fn parse_params(arg: Option<&String>) -> Result<TreeParams, Box<dyn Error>> {
    let mut params = TreeParams::new();
    match arg.map(String::as_str) {
        None => {}
        Some("unlimited") => params.set_max_depth(None),
        Some(depth) => params.set_max_depth(Some(depth.parse()?)),
    }
    Ok(params)
}

/// Holds out a test set only when a train size is given; every given size is validated.
fn split_dataset(
    dataset: Dataset,
    train_size: Option<f64>,
    seed: Option<u64>,
) -> entropy_tree::Result<(Dataset, Option<Dataset>)> {
    match train_size {
        Some(train_size) => {
            let (train, test) = dataset.train_test_split(train_size, seed)?;
            Ok((train, Some(test)))
        }
        None => Ok((dataset, None)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entropy_tree=info,train_tree=info".into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let file_path = args.first().ok_or(USAGE)?;
    let params = parse_params(args.get(1))?;
    let train_size: Option<f64> = args.get(2).map(|s| s.parse()).transpose()?;
    let seed: Option<u64> = args.get(3).map(|s| s.parse()).transpose()?;

    let dataset = read_file_classification(file_path)?;
    info!(records = dataset.len(), "loaded dataset");

    let (train_dataset, test_dataset) = split_dataset(dataset, train_size, seed)?;

    let mut classifier = DecisionTreeClassifier::with_params(params);
    classifier.fit(&train_dataset)?;
    if let Some(root) = classifier.root() {
        print!("{}", root);
    }

    if let Some(test_dataset) = test_dataset {
        let predictions = classifier.predict_all(test_dataset.records())?;
        let accuracy = classifier.accuracy(&test_dataset.labels(), &predictions)?;
        println!("Accuracy: {}%", accuracy * 100.0);
    }
    Ok(())
}
