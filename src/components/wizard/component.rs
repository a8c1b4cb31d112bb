// ABOUTME: Renders the quote wizard UI
// Immediate mode: every frame rebuilds the whole widget tree from AppState

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::state::AppState;
use crate::components::wizard::state::{ContactField, DetailsField, WizardStep};
use crate::models::{Frequency, LawnSize, PropertyType};
use crate::theme::Theme;

/// The quote wizard component. Stateless: everything it draws comes from the
/// state store passed into render.
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function, rebuilding the full widget subtree
    pub fn render(&self, frame: &mut Frame, state: &AppState, theme: &Theme) {
        let area = frame.size();
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(container, area);

        if state.config_failed {
            self.render_blocking_error(frame, area, state, theme);
            return;
        }

        let Some(config) = &state.config else {
            self.render_loading(frame, area, theme, "Loading your quote widget...");
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Header with progress
                Constraint::Min(14),    // Step content
                Constraint::Length(3),  // Footer: hints and inline errors
            ])
            .split(area);

        self.render_header(frame, layout[0], state, theme, &config.business_name);

        match state.wizard.step {
            WizardStep::ServiceSelect => self.render_service_select(frame, layout[1], state, theme),
            WizardStep::PropertyDetails => self.render_property_details(frame, layout[1], state, theme),
            WizardStep::QuoteContact => self.render_quote_contact(frame, layout[1], state, theme),
            WizardStep::Success => self.render_success(frame, layout[1], state, theme),
        }

        self.render_footer(frame, layout[2], state, theme);

        if state.is_loading {
            self.render_loading(frame, layout[1], theme, "Sending your request...");
        }
    }

    /// Full-screen placeholder while a network operation is pending
    fn render_loading(&self, frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel));

        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(theme.accent))),
            Line::from(""),
            Line::from(Span::styled("Please wait", Style::default().fg(theme.muted))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, inner);
    }

    /// Terminal failure screen for a config load that never succeeded
    fn render_blocking_error(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.panel))
            .title(" Quote Widget ")
            .title_style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = state
            .error
            .as_deref()
            .unwrap_or("Unable to load the quote widget.");

        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(theme.text))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to close",
                Style::default().fg(theme.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(text, inner);
    }

    /// Header: business name and step progress dots
    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        theme: &Theme,
        business_name: &str,
    ) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.panel));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                business_name,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — Instant Quote", Style::default().fg(theme.text)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state, theme);
    }

    /// Step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let steps = WizardStep::all();
        let current = state.wizard.step.index();

        let mut spans = vec![Span::styled("  ", Style::default())];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current {
                ("●", Style::default().fg(theme.success))
            } else if idx == current {
                ("◉", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(theme.muted))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current {
                    Style::default().fg(theme.text)
                } else {
                    Style::default().fg(theme.muted)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(theme.border)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    /// Step 0: the service catalog
    fn render_service_select(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = self.panel(theme, " Choose a service ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(config) = &state.config else {
            return;
        };

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(8)])
            .split(inner);

        let desc = Paragraph::new(Line::from(Span::styled(
            "What would you like a quote for?",
            Style::default().fg(theme.text),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(desc, content_layout[0]);

        let mut items: Vec<ListItem> = Vec::new();
        for (idx, service) in config.services.iter().enumerate() {
            let is_selected = idx == state.wizard.selected_service_index;

            let marker = if is_selected { "▶" } else { " " };
            let name_style = if is_selected {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };

            let mut line = vec![
                Span::styled("  ", Style::default()),
                Span::styled(marker, Style::default().fg(theme.success)),
                Span::styled(" ", Style::default()),
                Span::styled(&service.name, name_style),
            ];
            if let Some(description) = &service.description {
                line.push(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(theme.muted),
                ));
            }

            items.push(ListItem::new(Line::from(line)));
        }

        let list = List::new(items).style(Style::default().bg(theme.panel));
        frame.render_widget(list, content_layout[1]);
    }

    /// Step 1: address, property attributes, frequency, extras
    fn render_property_details(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = self.panel(theme, " About your property ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(config) = &state.config else {
            return;
        };

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Address
                Constraint::Length(3), // Postcode
                Constraint::Length(1), // Property type
                Constraint::Length(1), // Lawn size
                Constraint::Length(1), // Frequency
                Constraint::Min(3),    // Extras
            ])
            .split(inner);

        let focus = state.wizard.details_focus;
        let form = &state.wizard.form;

        self.render_text_input(
            frame,
            content_layout[0],
            theme,
            "Address",
            &form.address,
            focus == DetailsField::Address,
        );
        self.render_text_input(
            frame,
            content_layout[1],
            theme,
            "Postcode",
            &form.postcode,
            focus == DetailsField::Postcode,
        );

        self.render_selector(
            frame,
            content_layout[2],
            theme,
            "Property",
            form.property_type.label(),
            PropertyType::all().len(),
            focus == DetailsField::PropertyType,
        );
        self.render_selector(
            frame,
            content_layout[3],
            theme,
            "Lawn size",
            form.lawn_size.label(),
            LawnSize::all().len(),
            focus == DetailsField::LawnSize,
        );
        self.render_selector(
            frame,
            content_layout[4],
            theme,
            "Frequency",
            form.frequency.label(),
            Frequency::all().len(),
            focus == DetailsField::Frequency,
        );

        // Extras: a toggle list, highlighted row follows the extras cursor
        let extras_focused = focus == DetailsField::Extras;
        let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(Span::styled(
            if extras_focused {
                "Extras  (space to toggle)"
            } else {
                "Extras"
            },
            Style::default().fg(if extras_focused { theme.accent } else { theme.muted }),
        )))];

        for (idx, label) in config.extras.iter().enumerate() {
            let selected = form.has_extra(label);
            let highlighted = extras_focused && idx == state.wizard.extras_cursor;

            let checkbox = if selected { "[x]" } else { "[ ]" };
            let style = if highlighted {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(theme.text)
            } else {
                Style::default().fg(theme.muted)
            };

            items.push(ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(checkbox, style),
                Span::styled(" ", Style::default()),
                Span::styled(label.as_str(), style),
            ])));
        }

        let list = List::new(items).style(Style::default().bg(theme.panel));
        frame.render_widget(list, content_layout[5]);
    }

    /// Step 2: the computed quote plus contact fields
    fn render_quote_contact(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = self.panel(theme, " Your quote ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        self.render_quote_breakdown(frame, content_layout[0], state, theme);

        let form_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(content_layout[1]);

        let focus = state.wizard.contact_focus;
        let form = &state.wizard.form;

        self.render_text_input(
            frame,
            form_layout[0],
            theme,
            "Name",
            &form.name,
            focus == ContactField::Name,
        );
        self.render_text_input(
            frame,
            form_layout[1],
            theme,
            "Email",
            &form.email,
            focus == ContactField::Email,
        );
        self.render_text_input(
            frame,
            form_layout[2],
            theme,
            "Phone",
            &form.phone,
            focus == ContactField::Phone,
        );
    }

    fn render_quote_breakdown(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let currency = state
            .config
            .as_ref()
            .map(|c| c.currency.as_str())
            .unwrap_or("");

        let Some(quote) = &state.quote else {
            return;
        };

        let amount = |value| format!("{}{}", currency, value);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} estimated", amount(quote.price)),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("≈ {} minutes per visit", quote.duration_minutes),
                Style::default().fg(theme.muted),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Base        ", Style::default().fg(theme.muted)),
                Span::styled(amount(quote.base), Style::default().fg(theme.text)),
            ]),
            Line::from(vec![
                Span::styled("Extras      ", Style::default().fg(theme.muted)),
                Span::styled(amount(quote.extras_total), Style::default().fg(theme.text)),
            ]),
        ];

        if !quote.discount.is_zero() {
            lines.push(Line::from(vec![
                Span::styled("Discount   -", Style::default().fg(theme.muted)),
                Span::styled(amount(quote.discount), Style::default().fg(theme.success)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Leave your details and we'll be in touch",
            Style::default().fg(theme.text),
        )));

        let breakdown = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(breakdown, area);
    }

    /// Step 3: terminal confirmation, personalized with the contact details
    fn render_success(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = self.panel(theme, " Request sent ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let form = &state.wizard.form;

        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Thanks, {}!", form.name),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("We've received your request and will confirm your quote at {}.", form.email),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to close",
                Style::default().fg(theme.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(text, inner);
    }

    /// Footer: inline error if present, otherwise key hints for the step
    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(error) = &state.error {
            let message = Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(theme.error),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }

        let hints: &[(&str, &str)] = match state.wizard.step {
            WizardStep::ServiceSelect => &[("↑/↓", "Choose"), ("Enter", "Select"), ("Esc", "Close")],
            WizardStep::PropertyDetails => &[
                ("Tab", "Field"),
                ("←/→", "Change"),
                ("Enter", "Next"),
                ("Esc", "Back"),
            ],
            WizardStep::QuoteContact => &[("Tab", "Field"), ("Enter", "Submit"), ("Esc", "Back")],
            WizardStep::Success => &[("Enter", "Close")],
        };

        let mut spans = Vec::new();
        for (idx, (keys, label)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  |  ", Style::default().fg(theme.border)));
            }
            spans.push(Span::styled("[", Style::default().fg(theme.border)));
            spans.push(Span::styled(*keys, Style::default().fg(theme.accent)));
            spans.push(Span::styled("]", Style::default().fg(theme.border)));
            spans.push(Span::styled(format!(" {}", label), Style::default().fg(theme.muted)));
        }

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }

    fn panel(&self, theme: &Theme, title: &'static str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.panel))
            .title(title)
            .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    }

    /// Bordered single-line text input; the focused field shows a cursor bar
    fn render_text_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let border = if focused { theme.accent } else { theme.border };
        let text = if focused {
            format!("{}│", value)
        } else {
            value.to_string()
        };

        let input = Paragraph::new(text).style(Style::default().fg(theme.text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", label))
                .title_style(Style::default().fg(if focused { theme.accent } else { theme.muted })),
        );
        frame.render_widget(input, area);
    }

    /// One-line enum selector: `Label  ◀ value ▶  (n options)`
    #[allow(clippy::too_many_arguments)]
    fn render_selector(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        label: &str,
        value: &str,
        option_count: usize,
        focused: bool,
    ) {
        let label_style = Style::default().fg(if focused { theme.accent } else { theme.muted });
        let value_style = if focused {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        let line = Line::from(vec![
            Span::styled(format!("{:<10}", label), label_style),
            Span::styled("◀ ", Style::default().fg(if focused { theme.accent } else { theme.border })),
            Span::styled(value.to_string(), value_style),
            Span::styled(" ▶", Style::default().fg(if focused { theme.accent } else { theme.border })),
            Span::styled(
                format!("  ({} options)", option_count),
                Style::default().fg(theme.border),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
