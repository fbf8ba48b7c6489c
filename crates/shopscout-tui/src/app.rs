// TUI application state and key handling
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use shopscout_core::{Listing, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Browsing products
    Searching, // Typing in search box
}

/// Side effects the event loop has to carry out after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Refresh,
    OpenUrl(String),
    Quit,
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub listing: Listing,
    pub selected_index: usize,
    pub list_state: ListState,
    pub show_help: bool,
    pub error_message: Option<String>,
    // Drives the loading spinner
    pub tick: usize,
}

impl App {
    pub fn new(listing: Listing) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            listing,
            selected_index: 0,
            list_state,
            show_help: false,
            error_message: None,
            tick: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn next_product(&mut self) {
        let count = self.listing.displayed_products().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1).min(count - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_product(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.listing
            .displayed_products()
            .into_iter()
            .nth(self.selected_index)
    }

    /// Jump back to the top whenever the displayed list changes shape
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    /// Apply a key press to the state and report what the loop should do next
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return Action::Quit;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return Action::None;
        }

        match self.input_mode {
            InputMode::Searching => match key.code {
                KeyCode::Enter => {
                    // Submitting the search re-fetches the catalog
                    self.enter_normal_mode();
                    self.reset_selection();
                    return Action::Refresh;
                }
                KeyCode::Char(c) => {
                    let mut text = self.listing.filters.search_text.clone();
                    text.push(c);
                    self.listing.filters.set_search_text(text);
                    self.reset_selection();
                }
                KeyCode::Backspace => {
                    let mut text = self.listing.filters.search_text.clone();
                    text.pop();
                    self.listing.filters.set_search_text(text);
                    self.reset_selection();
                }
                KeyCode::Esc => {
                    self.enter_normal_mode();
                }
                _ => {}
            },
            InputMode::Normal => {
                self.clear_error();
                match key.code {
                    KeyCode::Char('q') => {
                        self.quit();
                        return Action::Quit;
                    }
                    KeyCode::Char('/') => {
                        self.enter_search_mode();
                    }
                    KeyCode::Char('?') => {
                        self.toggle_help();
                    }
                    KeyCode::Char('c') => {
                        self.listing.cycle_category();
                        self.reset_selection();
                    }
                    KeyCode::Char('r') => {
                        self.listing.cycle_rating();
                        self.reset_selection();
                    }
                    KeyCode::Char('s') => {
                        self.listing.cycle_sort_option();
                        self.reset_selection();
                    }
                    KeyCode::Char('x') => {
                        self.listing.filters.clear_filters();
                        self.reset_selection();
                    }
                    KeyCode::Char('R') | KeyCode::F(5) => {
                        self.reset_selection();
                        return Action::Refresh;
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        self.next_product();
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        self.previous_product();
                    }
                    KeyCode::Char('o') | KeyCode::Enter => {
                        if let Some(product) = self.selected_product() {
                            return Action::OpenUrl(product.image_url);
                        }
                    }
                    _ => {}
                }
            }
        }

        Action::None
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Listing::default())
    }
}
