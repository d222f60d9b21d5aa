//! Test fixtures - command scripts and config documents for testing

/// Reads the default, renames, reads again
pub fn rename_script() -> &'static str {
    "get\nset alice\nget\n"
}

/// Several writes in a row; only the last one should be observed
pub fn overwrite_script() -> &'static str {
    "set a\nset b\nget\n"
}

/// Sets the empty name with a bare `set`
pub fn empty_name_script() -> &'static str {
    "set\nget\n"
}

/// Comments, blank lines, aliases and CRLF line endings
pub fn mixed_script() -> &'static str {
    "# start\r\n\r\nGetName\r\nSetName  spaced out\r\n   get\r\n"
}

/// A valid command followed by an unknown one on line 3
pub fn unknown_command_script() -> &'static str {
    "set bob\nget\nrename carol\nget\n"
}

/// YAML config selecting JSON output
pub fn json_config_yaml() -> &'static str {
    "outputFormat: json\nechoCommands: false\n"
}

/// JSON config selecting text output with command echo
pub fn text_config_json() -> &'static str {
    r#"{ "outputFormat": "text", "echoCommands": true }"#
}

/// A config document that fails to deserialize
pub fn invalid_config_yaml() -> &'static str {
    "outputFormat: [not, a, format]\n"
}
