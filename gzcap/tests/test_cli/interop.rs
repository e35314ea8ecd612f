use crate::add_test;
use crate::common::{generate_random_data, Fixture, SAMPLE_TEXT};

// Output of gzcap can be read by the system gzip
add_test!(system_gzip_reads_our_output, async {
    const FILE_NAME: &str = "ours.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file(FILE_NAME, data);
    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let output = fixture.run_cargo(&["compress", "-k", &file_path]).await;
    assert!(output.status.success());

    let Some(output) = fixture
        .run_system("gzip", &["-d", "-c", &compressed_path])
        .await
    else {
        return;
    };
    assert!(output.status.success());
    assert!(output.stdout_raw == data);
});

// gzcap reads the output of the system gzip
add_test!(we_read_system_gzip_output, async {
    const FILE_NAME: &str = "theirs.bin";

    let data = generate_random_data(64 * 1000);
    let fixture = Fixture::with_file(FILE_NAME, &data);
    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    let Some(output) = fixture.run_system("gzip", &["-9", &file_path]).await else {
        return;
    };
    assert!(output.status.success());
    assert!(!fixture.file_exists(FILE_NAME));

    let output = fixture.run_cargo(&["decompress", &compressed_path]).await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_files(&[FILE_NAME], &[&data]);
});
