use amdorder::{amd::*, io::ConfigurablePrintTarget};

fn test_print_orderer() -> AmdOrderer {
    let settings = AmdSettingsBuilder::default().verbose(true).build().unwrap();
    AmdOrderer::new(settings)
}

fn star() -> [[i32; 4]; 4] {
    [[1, 1, 1, 1], [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1]]
}

#[test]
fn test_print_to_stdout() {
    let mut orderer = test_print_orderer();
    orderer.print_to_stdout();
    orderer.order(&star()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut orderer = test_print_orderer();
    orderer.print_to_buffer();
    orderer.order(&star()).unwrap();
    let result = orderer.get_print_buffer().unwrap();
    assert!(result.contains("amdorder"));
    assert!(result.contains("nonzeros in L"));
    assert!(result.contains("aggressive absorb : yes"));
}

#[test]
fn test_print_warnings() {
    let mut orderer = test_print_orderer();
    orderer.print_to_buffer();
    orderer.order(&[["0", "0"], ["0", "s"]]).unwrap();
    let result = orderer.get_print_buffer().unwrap();
    assert!(result.contains("1 non-numeric entries"));
}

#[test]
fn test_quiet_when_not_verbose() {
    let mut orderer = AmdOrderer::new(AmdSettings::default());
    orderer.print_to_buffer();
    orderer.order(&star()).unwrap();
    assert!(orderer.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut orderer = test_print_orderer();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    orderer.print_to_file(file.into_file());
    orderer.order(&star()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("amdorder"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut orderer = test_print_orderer();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    orderer.print_to_stream(stream);
    orderer.order(&star()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("amdorder"));
}

#[test]
fn test_print_to_sink() {
    let mut orderer = test_print_orderer();
    orderer.print_to_sink();
    orderer.order(&star()).unwrap();
    // no output
}
