//! Per-session navigation state.
//!
//! [`App`] owns everything one session mutates: the splash/main screen
//! state, the active tab and the content component driving the content
//! region. The content registry is shared read-only. Events are applied one
//! at a time through [`App::handle_event`] (see [`actions`]).

pub mod actions;


use std::sync::Arc;

use tracing::{debug, info};

use crate::core::content::{ContentRegistry, RecordKind, Section};
use crate::ui::delegate::document_lines;
use crate::ui::layout::ScreenLayout;
use crate::ui::list_browser::ListBrowser;
use crate::ui::scroll_viewport::ScrollViewport;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;

pub use actions::{AppOutcome, SessionEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Main,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: Screen,
    pub active_tab: usize,
    pub width: u16,
    pub height: u16,
    pub size_known: bool,
    pub splash_elapsed: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            screen: Screen::Splash,
            active_tab: 0,
            width: 0,
            height: 0,
            size_known: false,
            splash_elapsed: false,
        }
    }
}

/// How a section's content is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    /// Selectable records in fixed-height slots.
    List,
    /// One continuous scrolling document.
    Document,
    /// Lines centered in the content region.
    Static,
}

impl TabKind {
    pub fn for_section(section: &Section) -> Self {
        match section.kind() {
            Some(RecordKind::Skills) => TabKind::Document,
            Some(RecordKind::Contact) => TabKind::Static,
            Some(RecordKind::Education | RecordKind::Experience | RecordKind::Project) | None => {
                TabKind::List
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabKind::List => "list",
            TabKind::Document => "document",
            TabKind::Static => "static",
        }
    }
}

#[derive(Debug, Clone)]
pub enum ContentComponent {
    List(ListBrowser),
    Document(ScrollViewport),
    Static,
}

pub struct App {
    registry: Arc<ContentRegistry>,
    theme: Theme,
    nav: NavigationState,
    component: ContentComponent,
    spinner: Spinner,
    // Selection carried from the last list into the next one built.
    carried_selection: Option<usize>,
}

impl App {
    pub fn new(registry: Arc<ContentRegistry>, theme: Theme) -> Self {
        Self {
            registry,
            theme,
            nav: NavigationState::default(),
            component: ContentComponent::Static,
            spinner: Spinner::default(),
            carried_selection: None,
        }
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn component(&self) -> &ContentComponent {
        &self.component
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.registry.section(self.nav.active_tab)
    }

    pub fn section_count(&self) -> usize {
        self.registry.len()
    }

    /// Layout for the last reported geometry.
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.nav.width, self.nav.height, self.registry.title())
    }

    fn set_geometry(&mut self, width: u16, height: u16) {
        self.nav.width = width;
        self.nav.height = height;
        self.nav.size_known = true;
        debug!(width, height, "geometry reported");

        if self.nav.screen == Screen::Main {
            self.resize_component();
        }
        self.maybe_enter_main();
    }

    fn mark_splash_elapsed(&mut self) {
        self.nav.splash_elapsed = true;
        self.maybe_enter_main();
    }

    /// The splash screen closes once the timer has fired and geometry is known,
    /// whichever arrives last.
    fn maybe_enter_main(&mut self) {
        if self.nav.screen == Screen::Splash && self.nav.splash_elapsed && self.nav.size_known {
            self.nav.screen = Screen::Main;
            info!(
                width = self.nav.width,
                height = self.nav.height,
                "entering main view"
            );
            self.rebuild_component();
        }
    }

    fn select_tab(&mut self, index: usize) {
        if index >= self.section_count() {
            return;
        }
        self.nav.active_tab = index;
        debug!(tab = index, "tab selected");
        self.rebuild_component();
    }

    fn next_tab(&mut self) {
        let count = self.section_count();
        self.select_tab((self.nav.active_tab + 1) % count);
    }

    fn previous_tab(&mut self) {
        let count = self.section_count();
        self.select_tab((self.nav.active_tab + count - 1) % count);
    }

    fn rebuild_component(&mut self) {
        if let ContentComponent::List(list) = &self.component {
            self.carried_selection = list.selected();
        }

        let layout = self.layout();
        let width = layout.content_width as usize;
        let height = layout.content_height as usize;
        let registry = Arc::clone(&self.registry);
        let Some(section) = registry.section(self.nav.active_tab) else {
            self.component = ContentComponent::Static;
            return;
        };

        self.component = match TabKind::for_section(section) {
            TabKind::List => ContentComponent::List(ListBrowser::build(
                &section.records,
                width,
                height,
                self.carried_selection,
            )),
            TabKind::Document => {
                let mut viewport = ScrollViewport::new(width, height);
                viewport.set_content(document_lines(&section.records, width, &self.theme));
                viewport.goto_top();
                ContentComponent::Document(viewport)
            }
            TabKind::Static => ContentComponent::Static,
        };
    }

    fn resize_component(&mut self) {
        let layout = self.layout();
        let width = layout.content_width as usize;
        let height = layout.content_height as usize;
        match &mut self.component {
            ContentComponent::List(list) => list.set_size(width, height),
            ContentComponent::Document(viewport) => {
                viewport.set_size(width, height);
                // Wrapping depends on width, so the document is rebuilt.
                if let Some(section) = self.registry.section(self.nav.active_tab) {
                    viewport.set_content(document_lines(&section.records, width, &self.theme));
                }
            }
            ContentComponent::Static => {}
        }
    }
}
