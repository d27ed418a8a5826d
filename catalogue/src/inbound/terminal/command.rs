//! Parsing of terminal command lines.

use pagination::PageNumber;
use thiserror::Error;

use crate::domain::{EquipmentId, FormField, SortKey, UnknownFormField};

/// Which item a `show` command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTarget {
    /// One-based position on the current page.
    Position(usize),
    /// Item identifier.
    Id(EquipmentId),
}

/// One parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the current page.
    List,
    /// Change the sort key. `selector` keeps the text as typed.
    Sort {
        /// Resolved key.
        key: SortKey,
        /// Selector text as typed.
        selector: String,
    },
    /// Move to the next page.
    Next,
    /// Move to the previous page.
    Prev,
    /// Jump to a page.
    Page(PageNumber),
    /// Set or, with `None`, clear the title filter.
    Filter(Option<String>),
    /// Print one item in full.
    Show(ShowTarget),
    /// Edit one draft field.
    Set {
        /// Field to edit.
        field: FormField,
        /// New text, possibly empty.
        value: String,
    },
    /// Print the form.
    Form,
    /// Submit the form.
    Submit,
    /// List the commands.
    Help,
    /// End the session.
    Quit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command `{keyword}`; type `help` for a list")]
    Unknown {
        /// First word as typed.
        keyword: String,
    },
    /// A required argument is absent.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command keyword.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },
    /// The command takes no arguments but some were given.
    #[error("`{command}` takes no arguments")]
    UnexpectedArgument {
        /// Command keyword.
        command: &'static str,
    },
    /// The page argument is not a whole number of at least one.
    #[error("page must be a whole number ≥ 1, got `{value}`")]
    InvalidPage {
        /// Argument as typed.
        value: String,
    },
    /// `show` was given neither a position nor a UUID.
    #[error("`{value}` is neither a position on this page nor an item id")]
    InvalidShowTarget {
        /// Argument as typed.
        value: String,
    },
    /// `set` named a field the form does not have.
    #[error(transparent)]
    UnknownField(#[from] UnknownFormField),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// Keywords are case-insensitive. For `set` and `filter` everything after
    /// the field name or keyword is the value, with the single separating
    /// space removed.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the line is not a valid command.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogue::domain::{FormField, SortKey};
    /// use catalogue::inbound::terminal::Command;
    ///
    /// assert_eq!(Command::parse("  "), Ok(None));
    /// assert_eq!(
    ///     Command::parse("set title Tower crane"),
    ///     Ok(Some(Command::Set {
    ///         field: FormField::Title,
    ///         value: "Tower crane".to_owned(),
    ///     }))
    /// );
    /// assert!(matches!(
    ///     Command::parse("SORT price-desc"),
    ///     Ok(Some(Command::Sort { key: SortKey::PriceDesc, .. }))
    /// ));
    /// assert!(Command::parse("page two").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Ok(None);
        }
        let (keyword, rest) = split_word(trimmed);
        let argument = rest.trim();

        let command = match keyword.to_lowercase().as_str() {
            "list" | "ls" => no_arguments("list", argument, Self::List)?,
            "sort" => {
                if argument.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "sort",
                        argument: "a key: title, price-asc, price-desc or insertion",
                    });
                }
                Self::Sort {
                    key: SortKey::from_selector(argument),
                    selector: argument.to_owned(),
                }
            }
            "next" | "n" => no_arguments("next", argument, Self::Next)?,
            "prev" | "previous" | "p" => no_arguments("prev", argument, Self::Prev)?,
            "page" => Self::Page(parse_page(argument)?),
            "filter" | "search" => {
                Self::Filter((!argument.is_empty()).then(|| argument.to_owned()))
            }
            "show" => Self::Show(parse_show_target(argument)?),
            "set" => parse_set(rest)?,
            "form" => no_arguments("form", argument, Self::Form)?,
            "submit" | "add" => no_arguments("submit", argument, Self::Submit)?,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => {
                return Err(CommandError::Unknown {
                    keyword: keyword.to_owned(),
                });
            }
        };
        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace).unwrap_or((text, ""))
}

fn no_arguments(
    command: &'static str,
    argument: &str,
    parsed: Command,
) -> Result<Command, CommandError> {
    if argument.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::UnexpectedArgument { command })
    }
}

fn parse_page(argument: &str) -> Result<PageNumber, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "page",
            argument: "a page number",
        });
    }
    argument
        .parse::<usize>()
        .ok()
        .and_then(|value| PageNumber::new(value).ok())
        .ok_or_else(|| CommandError::InvalidPage {
            value: argument.to_owned(),
        })
}

fn parse_show_target(argument: &str) -> Result<ShowTarget, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "show",
            argument: "a position on this page or an item id",
        });
    }
    if let Ok(position) = argument.parse::<usize>() {
        return Ok(ShowTarget::Position(position));
    }
    argument
        .parse::<EquipmentId>()
        .map(ShowTarget::Id)
        .map_err(|_| CommandError::InvalidShowTarget {
            value: argument.to_owned(),
        })
}

fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let (name, value) = split_word(rest.trim_start());
    if name.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "set",
            argument: "a field name and a value",
        });
    }
    let field = name.parse::<FormField>()?;
    Ok(Command::Set {
        field,
        value: value.trim_end_matches(['\r', '\n']).to_owned(),
    })
}
