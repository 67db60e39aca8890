// Top-level screen the app is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Options,
    Game,
}

// Menu option selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewGame,
    Options,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsOption {
    HintsToggle,
    Back,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub state: MenuState,
    pub selected_option: MenuOption,
    pub options_selected: OptionsOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            state: MenuState::MainMenu,
            selected_option: MenuOption::NewGame,
            options_selected: OptionsOption::HintsToggle,
        }
    }
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_option(&mut self) {
        match self.state {
            MenuState::MainMenu => {
                self.selected_option = match self.selected_option {
                    MenuOption::NewGame => MenuOption::Options,
                    MenuOption::Options => MenuOption::Quit,
                    MenuOption::Quit => MenuOption::NewGame,
                };
            }
            MenuState::Options => {
                self.options_selected = match self.options_selected {
                    OptionsOption::HintsToggle => OptionsOption::Back,
                    OptionsOption::Back => OptionsOption::HintsToggle,
                };
            }
            MenuState::Game => {}
        }
    }

    pub fn prev_option(&mut self) {
        match self.state {
            MenuState::MainMenu => {
                self.selected_option = match self.selected_option {
                    MenuOption::NewGame => MenuOption::Quit,
                    MenuOption::Options => MenuOption::NewGame,
                    MenuOption::Quit => MenuOption::Options,
                };
            }
            // Only two entries, so backwards is the same as forwards
            MenuState::Options => self.next_option(),
            MenuState::Game => {}
        }
    }
}
