use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Gauge, Paragraph, Widget},
    DefaultTerminal, Frame,
};
use tokio::runtime::Runtime;
use vault_client::{config::Config, VaultMonitor, VaultSummary};

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = args
        .get(2)
        .map(String::as_str)
        .or(Some("config.json"))
        .and_then(|path| Config::load(path).ok());

    let listing_id = args.get(1).cloned().or_else(|| {
        config
            .as_ref()
            .and_then(|c| c.tracked_listings.as_ref())
            .and_then(|listings| listings.first().cloned())
    });
    let listing_id = match listing_id {
        Some(listing_id) => listing_id,
        None => {
            eprintln!("usage: tui <listing-id> [config.json]");
            return Ok(());
        }
    };

    let rpc_url = config
        .as_ref()
        .map(|c| c.rpc_url.clone())
        .or_else(|| std::env::var("RPC_URL").ok())
        .unwrap_or_else(|| "https://api.devnet.solana.com".to_string());

    let monitor = VaultMonitor::new_with_endpoint(&rpc_url);
    let runtime = Runtime::new()?;

    let mut terminal = ratatui::init();

    let mut app = App {
        exit: false,
        listing_id,
        summary: None,
        error: None,
    };
    app.refresh(&runtime, &monitor);

    let app_result = app.run(&mut terminal, &runtime, &monitor);

    ratatui::restore();
    app_result
}

pub struct App {
    exit: bool,
    listing_id: String,
    summary: Option<VaultSummary>,
    error: Option<String>,
}

impl App {
    fn run(
        &mut self,
        terminal: &mut DefaultTerminal,
        runtime: &Runtime,
        monitor: &VaultMonitor,
    ) -> std::io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
                        KeyCode::Char('r') => self.refresh(runtime, monitor),
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    fn refresh(&mut self, runtime: &Runtime, monitor: &VaultMonitor) {
        match runtime.block_on(monitor.vault_summary(&self.listing_id)) {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, gauge_area, stats_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        Line::from(format!("Vault status for listing {}", self.listing_id))
            .bold()
            .render(title_area, buf);

        let summary = match &self.summary {
            Some(summary) => summary,
            None => {
                let message = self
                    .error
                    .clone()
                    .unwrap_or_else(|| "Fetching vault...".to_string());
                Paragraph::new(message).render(stats_area, buf);
                return;
            }
        };

        let ratio = (summary.total_deposited_sol / summary.funding_goal_sol).clamp(0.0, 1.0);
        Gauge::default()
            .block(Block::bordered().title("Funding"))
            .ratio(ratio)
            .label(format!(
                "{:.2} / {:.0} SOL",
                summary.total_deposited_sol, summary.funding_goal_sol
            ))
            .render(gauge_area, buf);

        let status = if summary.goal_reached {
            "Goal reached, token launch unlocked".to_string()
        } else if !summary.exists {
            "Vault not initialized yet".to_string()
        } else {
            format!(
                "{:.2} SOL needed to trigger token launch",
                summary.remaining_sol
            )
        };

        let mut lines = vec![
            Line::from(format!("Vault: {}", summary.vault_address)),
            Line::from(format!("Depositors: {}", summary.depositors)),
            Line::from(status),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(format!("Last refresh failed: {}", error)).dim());
        }
        lines.push(Line::from("press r to refresh, q to quit").dim());

        Paragraph::new(lines).render(stats_area, buf);
    }
}
