macro_rules! constant_strings {
    (
        $(
            $(#[$docs:meta])*
            ($name_upcase:ident, $value:expr),
        )+
    ) => {
        $(
            $(#[$docs])*
            #[allow(dead_code)]
            pub const $name_upcase: &'static str = $value;
        )+
    }
}

constant_strings! {
    // CLI
    (USAGE, "usage: ft-itoa <INT>..."),
    (LENGTH_DELIMITER, "\t"),
    /// Marks the end of options; everything after it is a value.
    (ARGS_DELIMITER, "--"),

    // ERRORS
    (ERROR_CONFIG, "failed to load configuration"),
    (ERROR_PARSE, "invalid integer argument"),
    (ERROR_CONVERT, "conversion failed"),
}
