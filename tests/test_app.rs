use ft_itoa_cli::{
    app::{self, Conversion},
    config::{FtConfig, OutputConfig},
};

#[test]
fn test_run_default_separator() {
    let config = FtConfig::default();
    let output = app::run(&config, ["0", "-1", "2147483647", "-2147483648"]).unwrap();
    assert_eq!(output, "0\n-1\n2147483647\n-2147483648");
}

#[test]
fn test_run_with_lengths() {
    let config = FtConfig {
        output: OutputConfig {
            separator: ",".into(),
            show_length: true,
        },
        ..Default::default()
    };

    let output = app::run(&config, vec!["42".to_string(), "-7".to_string()]).unwrap();
    assert_eq!(output, "42\t2,-7\t2");
}

#[test]
fn test_run_empty() {
    let args: [&str; 0] = [];
    assert_eq!(app::run(&FtConfig::default(), args).unwrap(), "");
}

#[test]
fn test_run_rejects_invalid_argument() {
    let err = app::run(&FtConfig::default(), ["12", "2147483648", "3"]).unwrap_err();
    assert_eq!(err.argument(), Some("2147483648"));
    assert!(err.to_string().starts_with("invalid integer argument `2147483648`"));
}

#[test]
fn test_conversion_accessors() {
    let conversion = Conversion::new(-305).unwrap();
    assert_eq!(conversion.input(), -305);
    assert_eq!(conversion.output().as_bytes_with_nul(), b"-305\0");
}
