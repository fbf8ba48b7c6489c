// UI rendering logic
use crate::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use shopscout_core::{
    view::{FAILURE_DESCRIPTION, FAILURE_HEADING, NO_PRODUCTS_DESCRIPTION, NO_PRODUCTS_HEADING},
    ListingView, Product,
};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];
const SIDEBAR_WIDTH: u16 = 28;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Filters + products
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_search_input(frame, app, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[2]);

    render_filters_group(frame, app, body[0]);

    match app.listing.view() {
        ListingView::Nothing => frame.render_widget(Block::default().borders(Borders::ALL), body[1]),
        ListingView::Loading => render_loading_view(frame, app, body[1]),
        ListingView::Failure => render_message_view(
            frame,
            body[1],
            FAILURE_HEADING,
            FAILURE_DESCRIPTION,
            Color::Red,
        ),
        ListingView::NoProducts => render_message_view(
            frame,
            body[1],
            NO_PRODUCTS_HEADING,
            NO_PRODUCTS_DESCRIPTION,
            Color::Yellow,
        ),
        ListingView::ProductList(products) => render_products_list(frame, app, &products, body[1]),
    }

    render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        let area = frame.area();
        crate::help_ui::render_keybindings_help(frame, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![Span::styled(
        "ShopScout",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(logo, header_chunks[0]);

    let mut stats = vec![Span::styled(
        format!("{} products", app.listing.products().len()),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];
    if let Some(fetched_at) = app.listing.fetched_at() {
        stats.push(Span::raw("  "));
        stats.push(Span::styled(
            format!("fetched {}", fetched_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let stats_widget = Paragraph::new(Line::from(stats))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);
    frame.render_widget(stats_widget, header_chunks[1]);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_style = match app.input_mode {
        InputMode::Searching => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default(),
    };

    let search_text = app.listing.filters.search_text.as_str();
    let input = Paragraph::new(search_text).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search (/ to type, ENTER to refresh)")
            .border_style(input_style),
    );

    frame.render_widget(input, area);

    if app.input_mode == InputMode::Searching {
        frame.set_cursor_position((area.x + search_text.chars().count() as u16 + 1, area.y + 1));
    }
}

fn render_filters_group(frame: &mut Frame, app: &App, area: Rect) {
    let options = app.listing.options();
    let filters = &app.listing.filters;

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let active = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Category (c)", heading))];
    for category in &options.categories {
        let is_active = filters.category_id.as_deref() == Some(category.category_id.as_str());
        lines.push(option_line(&category.name, is_active, active));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Rating (r)", heading)));
    for rating in &options.ratings {
        let is_active = filters.rating_id.as_deref() == Some(rating.rating_id.as_str());
        lines.push(option_line(&rating.stars_label(), is_active, active));
    }

    lines.push(Line::from(""));
    let clear_style = if filters.has_active_filters() {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled("[x] Clear Filters", clear_style)));

    if !app.listing.applies_filters() {
        lines.push(Line::from(Span::styled(
            "raw mode: filters not applied",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Filters "))
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn option_line(label: &str, is_active: bool, active_style: Style) -> Line<'static> {
    if is_active {
        Line::from(Span::styled(format!("> {}", label), active_style))
    } else {
        Line::from(Span::raw(format!("  {}", label)))
    }
}

fn render_loading_view(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER_FRAMES[app.tick % SPINNER_FRAMES.len()];

    let loading_text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Loading products...", spinner),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(loading_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_message_view(
    frame: &mut Frame,
    area: Rect,
    heading: &'static str,
    description: &'static str,
    color: Color,
) {
    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(description, Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_products_list(frame: &mut Frame, app: &mut App, products: &[Product], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    // Products header: title on the left, active sort option on the right
    let sort_text = app
        .listing
        .options()
        .sort_option(&app.listing.filters.sort_option_id)
        .map(|o| o.display_text.clone())
        .unwrap_or_else(|| app.listing.filters.sort_option_id.clone());

    let header = Paragraph::new(Line::from(vec![
        Span::styled("All Products", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("Sort by (s): ", Style::default().fg(Color::DarkGray)),
        Span::styled(sort_text, Style::default().fg(Color::Yellow)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = products
        .iter()
        .enumerate()
        .map(|(i, product)| product_card(product, i == app.selected_index))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({}) ", products.len())),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)));

    frame.render_stateful_widget(list, chunks[1], &mut app.list_state);
}

fn product_card(product: &Product, is_selected: bool) -> ListItem<'static> {
    let title_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let line1 = Line::from(vec![Span::styled(product.title.clone(), title_style)]);
    let line2 = Line::from(vec![
        Span::raw("   "),
        Span::styled(product.category.clone(), Style::default().fg(Color::Rgb(147, 112, 219))),
        Span::raw("  •  "),
        Span::styled(
            format_price(product.price),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  •  "),
        Span::styled(
            format!("★ {:.1}", product.rating),
            Style::default().fg(Color::Rgb(255, 215, 0)),
        ),
    ]);

    ListItem::new(vec![line1, line2])
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error_message {
        Span::styled(error.clone(), Style::default().fg(Color::Red))
    } else {
        match app.input_mode {
            InputMode::Searching => Span::styled(
                "SEARCH MODE | type to filter | ENTER: refresh | ESC: done",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::Normal => Span::raw(
                "j/k: navigate | /: search | c: category | r: rating | s: sort | x: clear | R: refresh | o: open | ?: help | q: quit",
            ),
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}
