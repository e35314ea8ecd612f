use crate::add_test;
use crate::common::{generate_random_data, Fixture, SAMPLE_TEXT, TEN_BYTES};

// Decompressing a file without .gz fails before any output is created
add_test!(wrong_extension, async {
    const FILE_NAME: &str = "data.txt";

    let fixture = Fixture::with_file(FILE_NAME, TEN_BYTES);
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_cargo(&["decompress", &file_path]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains(".gz"));

    assert_eq!(fixture.file_names(), [FILE_NAME]);
});

// An existing destination is left untouched
add_test!(destination_exists, async {
    const FILE_NAME: &str = "exists.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file(FILE_NAME, data);
    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let output = fixture.run_cargo(&["compress", "-k", &file_path]).await;
    assert!(output.status.success());

    fixture.write_file(FILE_NAME, b"do not clobber");

    let output = fixture.run_cargo(&["decompress", &compressed_path]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("already exists"));

    fixture.assert_files(&[FILE_NAME], &[b"do not clobber"]);
    assert!(fixture.file_exists("exists.txt.gz"));
});

// A decompression bomb is cut off at the limit and its output removed
add_test!(bomb_is_capped, async {
    const FILE_NAME: &str = "zeros.bin";

    let fixture = Fixture::with_file(FILE_NAME, &vec![0u8; 5_000_000]);
    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let output = fixture.run_cargo(&["compress", &file_path]).await;
    assert!(output.status.success());

    let output = fixture
        .run_cargo(&["decompress", "-l", "1M", &compressed_path])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("1000000"));

    assert!(!fixture.file_exists(FILE_NAME));
    assert!(fixture.file_exists("zeros.bin.gz"));
});

// Data that is not gzip is rejected without creating an output file
add_test!(malformed_header, async {
    const FILE_NAME: &str = "fake.gz";

    let fixture = Fixture::with_file(FILE_NAME, b"definitely not gzip");
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_cargo(&["decompress", &file_path]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("Not in gzip format"));

    assert_eq!(fixture.file_names(), [FILE_NAME]);
});

// Several files are decompressed in one invocation
add_test!(multiple_files, async {
    const FILE_1: &str = "file1.txt";
    const FILE_2: &str = "file2.txt";
    const FILE_3: &str = "file3.txt";

    let data_1 = generate_random_data(100);
    let data_2 = generate_random_data(200);
    let data_3 = generate_random_data(300);
    let fixture = Fixture::with_files(&[FILE_1, FILE_2, FILE_3], &[&data_1, &data_2, &data_3]);

    let output = fixture
        .run_cargo(&[
            "compress",
            &fixture.path(FILE_1),
            &fixture.path(FILE_2),
            &fixture.path(FILE_3),
        ])
        .await;
    assert!(output.status.success());

    let output = fixture
        .run_cargo(&[
            "decompress",
            &fixture.compressed_path(FILE_1),
            &fixture.compressed_path(FILE_2),
            &fixture.compressed_path(FILE_3),
        ])
        .await;
    assert!(output.status.success());

    assert_eq!(fixture.file_names(), [FILE_1, FILE_2, FILE_3]);
    fixture.assert_files(&[FILE_1, FILE_2, FILE_3], &[&data_1, &data_2, &data_3]);
});

// A file over the limit is skipped while the others are processed
add_test!(overflow_skips_only_that_file, async {
    const SMALL: &str = "small.txt";
    const BIG: &str = "big.txt";

    let big = generate_random_data(5000);
    let fixture = Fixture::with_files(&[SMALL, BIG], &[TEN_BYTES, &big]);

    let output = fixture
        .run_cargo(&["compress", &fixture.path(SMALL), &fixture.path(BIG)])
        .await;
    assert!(output.status.success());

    let output = fixture
        .run_cargo(&[
            "decompress",
            "-l",
            "4096",
            &fixture.compressed_path(BIG),
            &fixture.compressed_path(SMALL),
        ])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("big.txt.gz"));

    assert_eq!(fixture.file_names(), ["big.txt.gz", "small.txt"]);
    fixture.assert_files(&[SMALL], &[TEN_BYTES]);
});
