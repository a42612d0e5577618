//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It is the only owner of view state: the current report view, the current
//! workflow step and which of the two workspaces is on screen. Children
//! report intents as Actions and the App decides what they mean.

use crate::action::Action;
use crate::component::Component;
use crate::components::pages::{
    CompletePage, DashboardPage, DataQualityPage, DataWorkbenchPage, GainsAnalysisPage,
    HealthPage, MapColumnsPage, Page, PageContext, PageId, PortfolioOverviewPage, ReviewPage,
    SimulationPage, UploadPage,
};
use crate::components::{
    calculate_shell_layout, render_header, render_help_bar, HeaderContext, HelpDialog, QuitDialog,
    Sidebar,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::money::currency_code;
use crate::model::{Fixtures, ReportView, View, ViewCell, WorkflowStep, Workspace};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════════
// Workflow Transitions
// ═══════════════════════════════════════════════════════════════════════════════

/// Direction of a workflow intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIntent {
    Next,
    Back,
}

/// Every allowed workflow move; anything not listed is ignored
pub const WORKFLOW_TRANSITIONS: &[(WorkflowStep, StepIntent, WorkflowStep)] = &[
    (WorkflowStep::Dashboard, StepIntent::Next, WorkflowStep::Upload),
    (WorkflowStep::Upload, StepIntent::Next, WorkflowStep::Map),
    (WorkflowStep::Map, StepIntent::Next, WorkflowStep::Review),
    (WorkflowStep::Review, StepIntent::Next, WorkflowStep::Complete),
    (WorkflowStep::Complete, StepIntent::Next, WorkflowStep::Dashboard),
    (WorkflowStep::Upload, StepIntent::Back, WorkflowStep::Dashboard),
    (WorkflowStep::Map, StepIntent::Back, WorkflowStep::Upload),
    (WorkflowStep::Review, StepIntent::Back, WorkflowStep::Map),
];

/// Destination of `intent` from `from`, if the move exists
pub fn next_step(from: WorkflowStep, intent: StepIntent) -> Option<WorkflowStep> {
    WORKFLOW_TRANSITIONS
        .iter()
        .find(|(f, i, _)| *f == from && *i == intent)
        .map(|(_, _, to)| *to)
}

// ═══════════════════════════════════════════════════════════════════════════════
// App State
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    /// Navigation space on screen
    pub workspace: Workspace,
    reports: ViewCell<ReportView>,
    workflow: ViewCell<WorkflowStep>,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    currency: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub sidebar: Sidebar,
    dashboard: DashboardPage,
    upload: UploadPage,
    map_columns: MapColumnsPage,
    review: ReviewPage,
    complete: CompletePage,
    portfolio_overview: PortfolioOverviewPage,
    gains_analysis: GainsAnalysisPage,
    simulation: SimulationPage,
    data_workbench: DataWorkbenchPage,
    data_quality: DataQualityPage,
    health: HealthPage,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: &Config, fixtures: Fixtures) -> App {
        // The config may name the currency by symbol
        let currency = currency_code(&config.currency)
            .map(str::to_string)
            .unwrap_or_else(|| config.currency.clone());
        let ctx = PageContext::new(fixtures, currency.clone());

        let mut sidebar = Sidebar::default();
        sidebar.set_current(Some(config.landing_view));

        App {
            workspace: Workspace::Reports,
            reports: ViewCell::new(config.landing_view),
            workflow: ViewCell::default(),
            modals: ModalStack::new(),
            should_quit: false,
            currency,
            sidebar,
            dashboard: DashboardPage::new(ctx.clone()),
            upload: UploadPage::new(ctx.clone()),
            map_columns: MapColumnsPage::new(ctx.clone()),
            review: ReviewPage::new(ctx.clone()),
            complete: CompletePage::new(ctx.clone()),
            portfolio_overview: PortfolioOverviewPage::new(ctx.clone()),
            gains_analysis: GainsAnalysisPage::new(ctx.clone()),
            simulation: SimulationPage::new(ctx.clone()),
            data_workbench: DataWorkbenchPage::new(ctx.clone()),
            data_quality: DataQualityPage::new(ctx.clone()),
            health: HealthPage::new(ctx),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    pub fn report_view(&self) -> ReportView {
        self.reports.current()
    }

    pub fn workflow_step(&self) -> WorkflowStep {
        self.workflow.current()
    }

    /// Show a report page; switches to the report workspace
    pub fn set_report_view(&mut self, view: ReportView) {
        let previous = self.reports.set_view(view);
        self.workspace = Workspace::Reports;
        self.sidebar.set_current(Some(view));
        debug!(from = ?previous, to = ?view, "report view changed");
    }

    /// Show a workflow step; switches to the import workspace
    pub fn set_workflow_step(&mut self, step: WorkflowStep) {
        let previous = self.workflow.set_view(step);
        self.workspace = Workspace::Import;
        self.sidebar.set_current(None);
        debug!(from = ?previous, to = ?step, "workflow step changed");
    }

    /// The one page bound to the current view
    pub fn active_page(&self) -> PageId {
        match self.workspace {
            Workspace::Reports => match self.reports.current() {
                ReportView::Dashboard => PageId::Dashboard,
                ReportView::DataWorkbench => PageId::DataWorkbench,
                ReportView::PortfolioOverview => PageId::PortfolioOverview,
                ReportView::GainsAnalysis => PageId::GainsAnalysis,
                ReportView::Simulation => PageId::Simulation,
                ReportView::DataQuality => PageId::DataQuality,
                ReportView::Health => PageId::Health,
            },
            Workspace::Import => match self.workflow.current() {
                WorkflowStep::Dashboard => PageId::Dashboard,
                WorkflowStep::Upload => PageId::Upload,
                WorkflowStep::Map => PageId::MapColumns,
                WorkflowStep::Review => PageId::Review,
                WorkflowStep::Complete => PageId::Complete,
            },
        }
    }

    fn page_mut(&mut self, id: PageId) -> &mut dyn Page {
        match id {
            PageId::Dashboard => &mut self.dashboard,
            PageId::Upload => &mut self.upload,
            PageId::MapColumns => &mut self.map_columns,
            PageId::Review => &mut self.review,
            PageId::Complete => &mut self.complete,
            PageId::PortfolioOverview => &mut self.portfolio_overview,
            PageId::GainsAnalysis => &mut self.gains_analysis,
            PageId::Simulation => &mut self.simulation,
            PageId::DataWorkbench => &mut self.data_workbench,
            PageId::DataQuality => &mut self.data_quality,
            PageId::Health => &mut self.health,
        }
    }

    /// Apply a workflow intent
    ///
    /// From the report workspace the workflow starts over at its first step.
    fn step_workflow(&mut self, intent: StepIntent) {
        let from = match self.workspace {
            Workspace::Import => self.workflow.current(),
            Workspace::Reports => WorkflowStep::DEFAULT,
        };

        match next_step(from, intent) {
            Some(to) => self.set_workflow_step(to),
            None => debug!(?from, ?intent, "no workflow transition"),
        }
    }

    fn toggle_workspace(&mut self) {
        self.workspace = self.workspace.toggled();
        let highlighted = match self.workspace {
            Workspace::Reports => Some(self.reports.current()),
            Workspace::Import => None,
        };
        self.sidebar.set_current(highlighted);
        debug!(workspace = self.workspace.name(), "workspace toggled");
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        info!(
            view = ?self.reports.current(),
            currency = %self.currency,
            "app started"
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let global = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('w') => Some(Action::ToggleWorkspace),
            KeyCode::Char('H') => Some(Action::ShowReport(ReportView::Health)),
            _ => None,
        };
        if global.is_some() {
            return Ok(global);
        }

        let page = self.active_page();
        if let Some(action) = self.page_mut(page).handle_key_event(key)? {
            return Ok(Some(action));
        }

        match self.workspace {
            Workspace::Reports => self.sidebar.handle_key_event(key),
            Workspace::Import => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        self.sidebar.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("quitting");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::ShowReport(view) => self.set_report_view(view),
            Action::WorkflowNext => self.step_workflow(StepIntent::Next),
            Action::WorkflowBack => self.step_workflow(StepIntent::Back),
            Action::ToggleWorkspace => self.toggle_workspace(),
            Action::SelectStatement(index) => {
                debug!(index, "statement selected");
                self.complete.set_source(index);
            }

            // ─────────────────────────────────────────────────────────────────
            // Delegated to children
            // ─────────────────────────────────────────────────────────────────
            Action::SidebarDown | Action::SidebarUp => return self.sidebar.update(action),
            Action::RaiseReturn
            | Action::LowerReturn
            | Action::ExtendHorizon
            | Action::ShortenHorizon => return self.simulation.update(action),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_shell_layout(area);

        let (title, step) = match self.workspace {
            Workspace::Reports => (self.reports.current().label(), None),
            Workspace::Import => {
                let step = self.workflow.current();
                (step.label(), Some(step))
            }
        };
        let header = HeaderContext {
            workspace: self.workspace,
            title,
            step,
            currency: &self.currency,
        };
        render_header(frame, layout.header, &header);

        self.sidebar.draw(frame, layout.sidebar)?;

        let page_id = self.active_page();
        let page = self.page_mut(page_id);
        page.draw(frame, layout.content)?;
        let hints = page.hints();
        render_help_bar(frame, layout.help, self.workspace, hints);

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(&Config::default(), Fixtures::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the app the way the main loop does
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(key(code)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                app.draw(f, area).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn contains(screen: &[String], needle: &str) -> bool {
        screen.iter().any(|l| l.contains(needle))
    }

    #[test]
    fn test_starts_on_landing_view() {
        let app = app();
        assert_eq!(app.workspace, Workspace::Reports);
        assert_eq!(app.report_view(), ReportView::Dashboard);
        assert_eq!(app.workflow_step(), WorkflowStep::Dashboard);
        assert_eq!(app.active_page(), PageId::Dashboard);

        let config = Config {
            landing_view: ReportView::Simulation,
            ..Config::default()
        };
        let app = App::new(&config, Fixtures::default());
        assert_eq!(app.active_page(), PageId::Simulation);
        assert_eq!(app.sidebar.active_items().len(), 1);
    }

    #[test]
    fn test_currency_symbol_in_config() {
        let config = Config {
            currency: "¥".to_string(),
            ..Config::default()
        };
        let mut app = App::new(&config, Fixtures::default());
        assert_eq!(app.currency, "CNY");

        let screen = render(&mut app, 140, 40);
        assert!(contains(&screen, "¥131,200"));
    }

    #[test]
    fn test_every_report_view_binds_one_page() {
        let mut app = app();
        let mut seen = Vec::new();
        for view in ReportView::ALL {
            app.set_report_view(*view);
            assert_eq!(app.report_view(), *view);
            assert_eq!(app.workspace, Workspace::Reports);
            seen.push(app.active_page());
        }
        seen.dedup();
        assert_eq!(seen.len(), ReportView::ALL.len());
    }

    #[test]
    fn test_every_workflow_step_binds_one_page() {
        let mut app = app();
        let expected = [
            PageId::Dashboard,
            PageId::Upload,
            PageId::MapColumns,
            PageId::Review,
            PageId::Complete,
        ];
        for (step, page) in WorkflowStep::ALL.iter().zip(expected) {
            app.set_workflow_step(*step);
            assert_eq!(app.workflow_step(), *step);
            assert_eq!(app.workspace, Workspace::Import);
            assert_eq!(app.active_page(), page);
        }
    }

    #[test]
    fn test_transition_table() {
        use StepIntent::{Back, Next};
        assert_eq!(next_step(WorkflowStep::Dashboard, Next), Some(WorkflowStep::Upload));
        assert_eq!(next_step(WorkflowStep::Complete, Next), Some(WorkflowStep::Dashboard));
        assert_eq!(next_step(WorkflowStep::Review, Back), Some(WorkflowStep::Map));
        assert_eq!(next_step(WorkflowStep::Dashboard, Back), None);
        assert_eq!(next_step(WorkflowStep::Complete, Back), None);

        for step in WorkflowStep::ALL {
            assert!(next_step(*step, Next).is_some());
        }
    }

    #[test]
    fn test_workflow_next_from_dashboard_shows_upload() {
        let mut app = app();
        app.set_workflow_step(WorkflowStep::Dashboard);

        app.update(Action::WorkflowNext).unwrap();

        assert_eq!(app.workflow_step(), WorkflowStep::Upload);
        assert_eq!(app.active_page(), PageId::Upload);
    }

    #[test]
    fn test_full_import_cycle_with_keys() {
        let mut app = app();
        app.set_workflow_step(WorkflowStep::Dashboard);

        let mut visited = vec![app.workflow_step()];
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('n'));
            visited.push(app.workflow_step());
        }
        assert_eq!(
            visited,
            vec![
                WorkflowStep::Dashboard,
                WorkflowStep::Upload,
                WorkflowStep::Map,
                WorkflowStep::Review,
                WorkflowStep::Complete,
                WorkflowStep::Dashboard,
            ]
        );
    }

    #[test]
    fn test_chosen_statement_reaches_complete() {
        let mut app = app();
        app.set_workflow_step(WorkflowStep::Upload);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('n'));
        }
        assert_eq!(app.active_page(), PageId::Complete);

        let screen = render(&mut app, 140, 40);
        assert!(screen.iter().any(|l| l.contains("from checking_2024_06.csv")));
        assert!(!screen.iter().any(|l| l.contains("brokerage_2024_06.csv")));
    }

    #[test]
    fn test_back_edges_and_ignored_intents() {
        let mut app = app();
        app.set_workflow_step(WorkflowStep::Review);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.workflow_step(), WorkflowStep::Map);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.workflow_step(), WorkflowStep::Upload);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.workflow_step(), WorkflowStep::Dashboard);

        app.update(Action::WorkflowBack).unwrap();
        assert_eq!(app.workflow_step(), WorkflowStep::Dashboard);

        app.set_workflow_step(WorkflowStep::Complete);
        app.update(Action::WorkflowBack).unwrap();
        assert_eq!(app.workflow_step(), WorkflowStep::Complete);
    }

    #[test]
    fn test_import_starts_from_reports_dashboard() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.workspace, Workspace::Import);
        assert_eq!(app.workflow_step(), WorkflowStep::Upload);
        assert!(app.sidebar.active_items().is_empty());

        app.update(Action::ShowReport(ReportView::GainsAnalysis)).unwrap();
        app.update(Action::WorkflowBack).unwrap();
        assert_eq!(app.workspace, Workspace::Reports);
        assert_eq!(app.active_page(), PageId::GainsAnalysis);
    }

    #[test]
    fn test_sidebar_highlights_current_view() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.report_view(), ReportView::PortfolioOverview);

        let active = app.sidebar.active_items();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].view, ReportView::PortfolioOverview);

        press(&mut app, KeyCode::Char('H'));
        assert_eq!(app.active_page(), PageId::Health);
        assert!(app.sidebar.active_items().is_empty());
    }

    #[test]
    fn test_sidebar_cursor_and_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.report_view(), ReportView::Dashboard);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.report_view(), ReportView::GainsAnalysis);
    }

    #[test]
    fn test_toggle_workspace_keeps_both_positions() {
        let mut app = app();
        app.set_workflow_step(WorkflowStep::Review);
        app.set_report_view(ReportView::DataQuality);

        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.active_page(), PageId::Review);
        assert!(app.sidebar.active_items().is_empty());

        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.active_page(), PageId::DataQuality);
        assert_eq!(app.sidebar.active_items().len(), 1);
    }

    #[test]
    fn test_simulation_keys_reach_page() {
        let mut app = app();
        app.set_report_view(ReportView::Simulation);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.simulation.params().annual_return, 6.5);
        assert_eq!(app.simulation.params().years, 11);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        // Modal swallows navigation keys
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.workspace, Workspace::Reports);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_through_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_mouse_click_opens_menu_entry() {
        let mut app = app();
        render(&mut app, 140, 40);

        // Header takes 3 rows, the sidebar border one more, then the
        // "OVERVIEW" title, Dashboard, Portfolio Overview
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse_event(click).unwrap();
        assert_eq!(action, Some(Action::ShowReport(ReportView::PortfolioOverview)));
    }

    #[test]
    fn test_draws_shell_around_active_page() {
        let mut app = app();
        let screen = render(&mut app, 140, 40);
        assert!(contains(&screen, "folio"));
        assert!(contains(&screen, "Reports"));
        assert!(contains(&screen, "Net Worth"));
        assert!(contains(&screen, "Menu"));

        press(&mut app, KeyCode::Char('n'));
        let screen = render(&mut app, 140, 40);
        assert!(contains(&screen, "Import"));
        assert!(contains(&screen, "Statement Files"));
        assert!(!contains(&screen, "Net Worth Trend"));
    }

    #[test]
    fn test_draws_with_empty_fixtures() {
        let mut app = App::new(&Config::default(), Fixtures::empty());
        for view in ReportView::ALL {
            app.set_report_view(*view);
            render(&mut app, 120, 36);
        }
        for step in WorkflowStep::ALL {
            app.set_workflow_step(*step);
            render(&mut app, 120, 36);
        }
    }
}
