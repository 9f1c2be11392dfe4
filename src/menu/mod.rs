//! Menu Module
//!
//! The interactive loop that ties the table, the file and the console.
//!
//! ## States
//! ```text
//!          ┌──── 1: insert + save ────┐
//!          │                          │
//!          ▼                          │
//!   ┌────────────┐  2: found   ┌──────┴───────┐
//!   │  MainMenu  │────────────►│ SearchResult │── E / R: save ──┐
//!   └─────┬──────┘◄────────────└──────────────┘                 │
//!         │          V / not found     ▲                         │
//!         │ 3                          └─────────────────────────┘
//!         ▼                                 (back to MainMenu)
//!   ┌────────────┐
//!   │    Exit    │
//!   └────────────┘
//! ```
//!
//! Insert always saves. Edit and remove save only when they report
//! `Outcome::Changed`: a cancelled edit, an empty new value or a declined
//! removal leaves the file untouched and prints no save line.

mod choice;

pub use choice::{MainChoice, ResultAction};

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::console::Console;
use crate::error::{CadastroError, Result};
use crate::ops;
use crate::record::StudentId;
use crate::storage::FileStore;
use crate::store::Table;

const RULE: &str = "========================================";

/// Where the loop goes next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    SearchResult(StudentId),
    Exit,
}

/// One interactive session over a roster file
pub struct Menu<R, W> {
    table: Table,
    store: FileStore,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Load the configured file and prepare a session
    ///
    /// A corrupt file aborts here; nothing is shown to the user beyond the
    /// loading line.
    pub fn open(config: &Config, console: Console<R, W>) -> Result<Self> {
        config.validate()?;

        let store = FileStore::from_config(config);
        let mut console = console.with_max_retries(config.max_retries);

        if store.exists() {
            console.say(format!("Lendo dados de {}...", store.path().display()))?;
        } else {
            console.say("Arquivo de dados não encontrado. Criando uma nova tabela vazia.")?;
        }
        let table = store.load()?;

        Ok(Self::new(table, store, console))
    }

    pub fn new(table: Table, store: FileStore, console: Console<R, W>) -> Self {
        Self {
            table,
            store,
            console,
        }
    }

    /// Run until the user exits or the input ends
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::Main;
        loop {
            state = match self.step(state) {
                Ok(MenuState::Exit) => return Ok(()),
                Ok(next) => next,
                Err(CadastroError::InputClosed) => {
                    tracing::info!("Input closed, ending session");
                    return Ok(());
                }
                Err(CadastroError::RetriesExhausted { prompt, attempts }) => {
                    tracing::warn!("Gave up on {:?} after {} attempts", prompt, attempts);
                    self.console.blank()?;
                    self.console
                        .say("[ERRO] Muitas tentativas inválidas. Voltando ao menu principal.")?;
                    MenuState::Main
                }
                Err(e @ CadastroError::IdExhausted(_)) => {
                    tracing::warn!("Insert refused: {}", e);
                    self.console.blank()?;
                    self.console
                        .say("[ERRO] Não há mais matrículas disponíveis. Nenhum aluno inserido.")?;
                    MenuState::Main
                }
                Err(e) => return Err(e),
            };
        }
    }

    /// Execute one state and return the next
    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        tracing::debug!("Menu state {:?}", state);
        match state {
            MenuState::Main => self.main_menu(),
            MenuState::SearchResult(id) => self.result_menu(id),
            MenuState::Exit => Ok(MenuState::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        self.console.blank()?;
        self.console.say(RULE)?;
        self.console.say("SISTEMA DE CADASTRO DE ALUNOS")?;
        self.console.say(RULE)?;
        self.console.say("1 - INSERIR NOVO ALUNO")?;
        self.console.say("2 - PESQUISAR, EDITAR ou REMOVER ALUNO")?;
        self.console.say("3 - SAIR")?;
        self.console.say(RULE)?;

        let answer = self.console.read_line("Digite a opção desejada: ")?;
        match MainChoice::parse(&answer) {
            Some(MainChoice::Insert) => {
                ops::insert(&mut self.table, &mut self.console)?;
                self.persist()?;
                Ok(MenuState::Main)
            }
            Some(MainChoice::Search) => {
                let found = ops::search(&self.table, &mut self.console)?;
                Ok(found.map_or(MenuState::Main, MenuState::SearchResult))
            }
            Some(MainChoice::Exit) => {
                self.console.blank()?;
                self.console.say("Encerrando o programa. Até logo!")?;
                Ok(MenuState::Exit)
            }
            None => {
                self.console.blank()?;
                self.console
                    .say("Opção inválida. Por favor, escolha 1, 2 ou 3.")?;
                Ok(MenuState::Main)
            }
        }
    }

    fn result_menu(&mut self, id: StudentId) -> Result<MenuState> {
        self.console.blank()?;
        self.console
            .say("[AÇÃO] Deseja EDITAR (E), REMOVER (R) ou VOLTAR ao Menu (V)?")?;
        let action = self.console.ask("Digite a opção (E/R/V): ", |answer| {
            ResultAction::parse(answer)
                .ok_or_else(|| CadastroError::Parse("Opção inválida.".to_string()))
        })?;

        let outcome = match action {
            ResultAction::Edit => ops::edit(&mut self.table, id, &mut self.console)?,
            ResultAction::Remove => ops::remove(&mut self.table, id, &mut self.console)?,
            ResultAction::Back => {
                self.console.say("[INFO] Voltando ao menu principal.")?;
                return Ok(MenuState::Main);
            }
        };

        if outcome.is_changed() {
            self.persist()?;
        }
        Ok(MenuState::Main)
    }

    /// Save the table, reporting a failed write without ending the session
    fn persist(&mut self) -> Result<()> {
        match self.store.save(&self.table) {
            Ok(()) => {
                self.console.blank()?;
                self.console
                    .say("[SUCESSO] Dados salvos no arquivo com sucesso!")
            }
            Err(e) => {
                tracing::warn!("Save to {} failed: {}", self.store.path().display(), e);
                self.console.blank()?;
                self.console
                    .say(format!("[ERRO] Não foi possível salvar os dados: {}", e))
            }
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_parts(self) -> (Table, Console<R, W>) {
        (self.table, self.console)
    }
}
