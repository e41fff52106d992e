use std::{fs, io::Write};

use ndarray::array;
use tempdir::TempDir;
use wordpipe::{
    StaticVectors, Transform, VectorOptions, VectorTable, WordpipeError,
    functional::vector_func,
};

#[test]
fn load_vectors_from_path() {
    let dir = TempDir::new("wordpipe_vectors").unwrap();
    let path = dir.path().join("vectors.txt");

    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "2 3").unwrap();
    writeln!(file, "hello 1 0 0").unwrap();
    writeln!(file, "world 0 1 0").unwrap();
    drop(file);

    let vectors = StaticVectors::from_path(&path, VectorOptions::default()).unwrap();
    assert_eq!(vectors.len(), 2);
    assert_eq!(vectors.dim(), 3);

    let f = vector_func(vectors);
    let out = f.apply(vec![vec!["world", "hello"], vec!["nope"]]).unwrap();
    assert_eq!(out[0], array![[0.0_f32, 1.0, 0.0], [1.0, 0.0, 0.0]]);
    assert_eq!(out[1], array![[0.0_f32, 0.0, 0.0]]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new("wordpipe_vectors").unwrap();
    let err = StaticVectors::from_path(dir.path().join("absent.txt"), VectorOptions::default())
        .unwrap_err();
    assert!(matches!(err, WordpipeError::Io(_)));
}
