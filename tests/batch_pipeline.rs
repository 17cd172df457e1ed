//! End-to-end tests for the batch Elastic Net pipeline.

use std::io::Write;
use std::path::PathBuf;

use elastic_net_batch::{
    BatchDriver, ColumnSelection, DataLoader, DataLoaderFactory, ElasticNetError, Predictor,
    RunConfig, TextDataLoader, Trainer,
};
use smartcore::linalg::basic::arrays::Array;
use tempfile::NamedTempFile;

/// Writes `rows` observations with 10 independent and 2 dependent columns.
fn write_dataset(rows: usize, offset: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in offset..offset + rows {
        let x: Vec<f64> = (0..10)
            .map(|j| (((i + 1) * (j + 3)) % 13) as f64 / 13.0)
            .collect();
        let y0 = 1.5 * x[0] - 0.5 * x[3] + 0.25 * x[9] + 2.0;
        let y1 = -x[1] + 0.75 * x[4] - 1.0;
        let fields: Vec<String> = x
            .iter()
            .chain([y0, y1].iter())
            .map(|v| format!("{:.6}", v))
            .collect();
        writeln!(file, "{}", fields.join(",")).unwrap();
    }
    file.flush().unwrap();
    file
}

fn config_for(train: &NamedTempFile, test: &NamedTempFile) -> RunConfig {
    RunConfig {
        train_file: train.path().to_path_buf(),
        test_file: test.path().to_path_buf(),
        ..RunConfig::default()
    }
}

#[test]
fn twenty_by_twelve_train_five_by_twelve_test_gives_five_by_two() {
    let train = write_dataset(20, 0);
    let test = write_dataset(5, 100);

    let output = BatchDriver::new(config_for(&train, &test)).run().unwrap();

    assert_eq!(output.prediction.shape(), (5, 2));
    assert_eq!(output.ground_truth.shape(), (5, 2));
    assert_eq!(output.report.n_targets(), 2);
}

#[test]
fn every_loader_and_engine_keeps_the_shape_invariant() {
    let train = write_dataset(30, 0);
    let test = write_dataset(7, 50);

    for loader in DataLoaderFactory::available_formats() {
        for model in ["elastic_net", "smartcore_elastic_net"] {
            let config = RunConfig {
                loader: Some(loader.to_string()),
                model: model.to_string(),
                model_params: [("alpha".to_string(), "0.01".to_string())]
                    .into_iter()
                    .collect(),
                ..config_for(&train, &test)
            };
            let output = BatchDriver::new(config).run().unwrap();
            assert_eq!(output.prediction.shape(), (7, 2), "{loader}/{model}");
        }
    }
}

#[test]
fn small_penalty_predicts_close_to_ground_truth() {
    let train = write_dataset(60, 0);
    let test = write_dataset(10, 200);
    let config = RunConfig {
        model_params: [
            ("alpha".to_string(), "0.0001".to_string()),
            ("tol".to_string(), "1e-9".to_string()),
            ("max_iter".to_string(), "50000".to_string()),
        ]
        .into_iter()
        .collect(),
        ..config_for(&train, &test)
    };

    let output = BatchDriver::new(config).run().unwrap();
    for k in 0..2 {
        let mse = output.report.get_metric(k, "mse").unwrap();
        assert!(mse < 1e-3, "target {k}: mse {mse}");
    }
}

#[test]
fn intercept_flag_is_honoured() {
    let train = write_dataset(20, 0);
    let test = write_dataset(5, 40);
    let config = RunConfig {
        intercept_flag: false,
        ..config_for(&train, &test)
    };
    let output = BatchDriver::new(config).run().unwrap();
    assert_eq!(output.prediction.shape(), (5, 2));

    let config = RunConfig {
        intercept_flag: false,
        model: "smartcore_elastic_net".to_string(),
        ..config_for(&train, &test)
    };
    assert!(matches!(
        BatchDriver::new(config).run(),
        Err(ElasticNetError::InvalidParameter(_))
    ));
}

#[test]
fn prediction_with_fewer_features_fails() {
    let train = write_dataset(20, 0);
    let loader = TextDataLoader::new();
    let x = loader
        .load(train.path(), &ColumnSelection::range(0..10).unwrap())
        .unwrap();
    let y = loader
        .load(train.path(), &ColumnSelection::range(10..12).unwrap())
        .unwrap();
    let model = Trainer::builder()
        .model("elastic_net")
        .build()
        .unwrap()
        .train(&x, &y)
        .unwrap();

    let narrow = loader
        .load(train.path(), &ColumnSelection::range(0..9).unwrap())
        .unwrap();
    let err = Predictor::new().predict(&narrow, &model).unwrap_err();
    assert!(matches!(
        err,
        ElasticNetError::DimensionMismatch { expected: 10, actual: 9 }
    ));
}

#[test]
fn malformed_training_file_aborts() {
    let mut train = NamedTempFile::new().unwrap();
    writeln!(train, "1,2,3,4,5,6,7,8,9,10,11,12").unwrap();
    writeln!(train, "1,2,3,4,5,six,7,8,9,10,11,12").unwrap();
    train.flush().unwrap();
    let test = write_dataset(3, 0);

    let err = BatchDriver::new(config_for(&train, &test)).run().unwrap_err();
    assert!(matches!(err, ElasticNetError::Parse { line: 2, column: 5, .. }));
}

#[cfg(feature = "csv-reader")]
#[test]
fn both_loaders_read_files_identically() {
    let file = write_dataset(25, 3);
    let columns = ColumnSelection::range(0..12).unwrap();

    let a = DataLoaderFactory::create("csv")
        .unwrap()
        .load(file.path(), &columns)
        .unwrap();
    let b = DataLoaderFactory::create("text")
        .unwrap()
        .load(file.path(), &columns)
        .unwrap();

    assert_eq!(a.shape(), (25, 12));
    assert_eq!(a.shape(), b.shape());
    for i in 0..25 {
        for j in 0..12 {
            assert_eq!(a.get((i, j)).to_bits(), b.get((i, j)).to_bits());
        }
    }
}

#[test]
fn bundled_sample_data_runs() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = RunConfig {
        train_file: root.join("data/batch/linear_regression_train.csv"),
        test_file: root.join("data/batch/linear_regression_test.csv"),
        ..RunConfig::default()
    };

    let output = BatchDriver::new(config).run().unwrap();
    assert_eq!(output.prediction.shape(), (50, 2));
}
