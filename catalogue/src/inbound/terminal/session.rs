//! The interactive session: one command in, one rendering out.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::command::{Command, CommandError, ShowTarget};
use super::render::{FormDisplay, HELP, ItemDisplay, ListDisplay};
use crate::domain::{CatalogueStore, EquipmentForm, IdGenerator, ListView};

/// Prompt written before each command is read.
pub const PROMPT: &str = "> ";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next command.
    Continue(String),
    /// End the session.
    Quit,
}

/// Catalogue, form and list view of one terminal session.
///
/// ```
/// use catalogue::domain::{CatalogueStore, SequentialIdGenerator};
/// use catalogue::inbound::terminal::{Outcome, Session};
///
/// let mut session = Session::new(CatalogueStore::new(), SequentialIdGenerator::default());
/// for line in ["set title Crane", "set manufacturer Liebherr", "set price 4000"] {
///     session.handle_line(line);
/// }
/// let Outcome::Continue(output) = session.handle_line("submit") else {
///     panic!("session ended");
/// };
/// assert!(output.starts_with("Added Crane"));
/// assert_eq!(session.store().len(), 1);
/// ```
#[derive(Debug)]
pub struct Session<G> {
    store: CatalogueStore,
    form: EquipmentForm,
    view: ListView,
    ids: G,
}

impl<G: IdGenerator> Session<G> {
    /// Start a session over `store`, assigning new ids from `ids`.
    #[must_use]
    pub fn new(store: CatalogueStore, ids: G) -> Self {
        Self {
            store,
            form: EquipmentForm::new(),
            view: ListView::new(),
            ids,
        }
    }

    /// The catalogue.
    #[must_use]
    pub const fn store(&self) -> &CatalogueStore {
        &self.store
    }

    /// The add-equipment form.
    #[must_use]
    pub const fn form(&self) -> &EquipmentForm {
        &self.form
    }

    /// The list view state.
    #[must_use]
    pub const fn view(&self) -> &ListView {
        &self.view
    }

    /// Current page of the list as text.
    #[must_use]
    pub fn render_list(&self) -> String {
        let page = self.view.derive(self.store.items());
        ListDisplay::new(&page, self.view.filter()).to_string()
    }

    /// Parse and run one input line. Malformed lines change nothing and
    /// produce an error message.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(Some(command)) => self.handle(command),
            Ok(None) => Outcome::Continue(String::new()),
            Err(error) => {
                debug!(%error, "command rejected");
                Outcome::Continue(error_message(&error))
            }
        }
    }

    /// Run one parsed command.
    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!(?command, "handling command");
        let output = match command {
            Command::List => self.render_list(),
            Command::Sort { key, selector } => {
                debug!(%key, selector = %selector, "sort key changed");
                self.view.set_sort_key(key);
                self.render_list()
            }
            Command::Next => match self.view.next_page(self.store.items()) {
                Ok(_) => self.render_list(),
                Err(error) => format!("{error}\n"),
            },
            Command::Prev => match self.view.previous_page(self.store.items()) {
                Ok(_) => self.render_list(),
                Err(error) => format!("{error}\n"),
            },
            Command::Page(page) => match self.view.go_to(page, self.store.items()) {
                Ok(()) => self.render_list(),
                Err(error) => format!("{error}\n"),
            },
            Command::Filter(filter) => {
                self.view.set_filter(filter.as_deref());
                self.render_list()
            }
            Command::Show(target) => self.show(target),
            Command::Set { field, value } => {
                self.form.set_field(field, value);
                FormDisplay(&self.form).to_string()
            }
            Command::Form => FormDisplay(&self.form).to_string(),
            Command::Submit => self.submit(),
            Command::Help => format!("{HELP}\n"),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(output)
    }

    fn show(&self, target: ShowTarget) -> String {
        let found = match target {
            ShowTarget::Position(position) => {
                let page = self.view.derive(self.store.items());
                position
                    .checked_sub(1)
                    .and_then(|index| page.items.get(index).copied())
            }
            ShowTarget::Id(id) => self.store.find(id),
        };
        found.map_or_else(
            || "No such item.\n".to_owned(),
            |item| ItemDisplay(item).to_string(),
        )
    }

    fn submit(&mut self) -> String {
        match self.form.submit(&mut self.store, &mut self.ids) {
            Ok(id) => {
                let title = self
                    .store
                    .find(id)
                    .map(|item| item.title().to_owned())
                    .unwrap_or_default();
                format!("Added {title} ({id}).\n{}", self.render_list())
            }
            Err(errors) => format!(
                "Not added: {} field(s) need attention.\n{}",
                errors.len(),
                FormDisplay(&self.form)
            ),
        }
    }
}

fn error_message(error: &CommandError) -> String {
    format!("error: {error}\n")
}

/// Drive `session` from `input` until `quit` or end of input, writing every
/// rendering to `output`.
///
/// # Errors
///
/// Returns any I/O error raised while reading or writing.
pub fn run<G, R, W>(session: &mut Session<G>, input: R, mut output: W) -> io::Result<()>
where
    G: IdGenerator,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Equipment catalogue. Type `help` for commands.")?;
    write!(output, "{}", session.render_list())?;
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };
        match session.handle_line(&line) {
            Outcome::Continue(text) => write!(output, "{text}")?,
            Outcome::Quit => break,
        }
    }
    output.flush()
}
