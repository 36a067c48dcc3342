/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Empty,
    Exit,
    Help,
    Fetch(&'a str),
    Set { field: &'a str, value: &'a str },
    Show,
    Fields,
    Save(Option<&'a str>),
    Clear,
    Unknown(&'a str),
}

impl<'a> ReplCommand<'a> {
    /// Only the line terminator and the separators after the command word
    /// and after the field name are stripped; a `set` value keeps any
    /// trailing whitespace.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_end_matches(&['\n', '\r'][..]).trim_start();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command.trim_end() {
            "" => ReplCommand::Empty,
            "exit" | "quit" => ReplCommand::Exit,
            "help" => ReplCommand::Help,
            "fetch" => ReplCommand::Fetch(rest.trim()),
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                ReplCommand::Set {
                    field: field.trim_end(),
                    value: value.trim_start_matches(' '),
                }
            }
            "show" => ReplCommand::Show,
            "fields" => ReplCommand::Fields,
            "save" => match rest.trim() {
                "" => ReplCommand::Save(None),
                path => ReplCommand::Save(Some(path)),
            },
            "clear" => ReplCommand::Clear,
            other => ReplCommand::Unknown(other),
        }
    }
}

/// Turns literal `\n` sequences into line breaks.
pub fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}
