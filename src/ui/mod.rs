pub mod backdrop;
pub mod scoreboard;
pub mod viewport;

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Points};
use ratatui::widgets::*;

use crate::app::App;
use crate::button::PlayButton;
use crate::geometry;
use crate::host::Host;
use crate::settings::Rgb;
use crate::stats::Phase;

use scoreboard::ScoreLines;
use viewport::Viewport;

const ALIEN_COLOR: Color = Color::Rgb(70, 160, 60);
const ALIEN_EYE: Color = Color::Rgb(20, 40, 20);
const SHIP_COLOR: Color = Color::Rgb(40, 70, 140);
const TEXT_COLOR: Color = Color::Rgb(30, 30, 30);
const MARGIN: f64 = 20.0;

fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

pub fn render<H: Host>(frame: &mut Frame, app: &mut App<H>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(100, 100, 130)))
        .title(" Alien Invasion ")
        .title_style(Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD));
    app.viewport.area = block.inner(chunks[0]);

    let app = &*app;
    let vp = &app.viewport;
    let base = &app.game.settings.base;
    let bg = base.bg_color;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(rgb(bg))
        .x_bounds([0.0, vp.screen_width as f64])
        .y_bounds([0.0, vp.screen_height as f64])
        .paint(|ctx| {
            let specks: Vec<(f64, f64)> = app
                .backdrop
                .specks
                .iter()
                .map(|&(x, y)| (x, vp.canvas_y(y)))
                .collect();
            ctx.draw(&Points { coords: &specks, color: rgb(bg.darken(30)) });
            ctx.layer();

            let game = &app.game;
            for bullet in &game.bullets {
                fill_rect(ctx, vp, &bullet.rect, rgb(bullet.color));
            }
            paint_ship(ctx, vp, &game.ship.rect);
            for alien in &game.fleet.aliens {
                paint_alien(ctx, vp, &alien.rect);
            }
            ctx.layer();

            paint_scoreboard(ctx, app);
            if game.phase() != Phase::Active {
                paint_button(ctx, vp, &game.play_button);
            }
            paint_banner(ctx, app);

            if app.host.cursor_visible() {
                if let Some((x, y)) = app.pointer {
                    ctx.print(
                        x as f64,
                        vp.canvas_y(y as f64),
                        Span::styled("↖", Style::default().fg(TEXT_COLOR).bg(rgb(bg))),
                    );
                }
            }
        });
    frame.render_widget(canvas, chunks[0]);

    render_help(frame, chunks[1], app.game.phase());
}

fn fill_rect(ctx: &mut Context, vp: &Viewport, rect: &geometry::Rect, color: Color) {
    let (x, y) = vp.canvas_origin(rect);
    let step = vp.dot_height();
    let mut dy = 0.0;
    while dy < rect.height as f64 {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: y + dy,
            x2: x + rect.width as f64,
            y2: y + dy,
            color,
        });
        dy += step;
    }
}

/// Upward-pointing wedge filling the ship rect.
fn paint_ship(ctx: &mut Context, vp: &Viewport, rect: &geometry::Rect) {
    let (x, y) = vp.canvas_origin(rect);
    let w = rect.width as f64;
    let h = rect.height as f64;
    let step = vp.dot_height();
    let mut dy = 0.0;
    while dy < h {
        let inset = w / 2.0 * dy / h;
        ctx.draw(&CanvasLine {
            x1: x + inset,
            y1: y + dy,
            x2: x + w - inset,
            y2: y + dy,
            color: SHIP_COLOR,
        });
        dy += step;
    }
}

fn paint_alien(ctx: &mut Context, vp: &Viewport, rect: &geometry::Rect) {
    fill_rect(ctx, vp, rect, ALIEN_COLOR);
    let eye_y = vp.canvas_y((rect.top() + rect.height / 3) as f64);
    let left = (rect.left() + rect.width / 4) as f64;
    let right = (rect.right() - rect.width / 4) as f64;
    ctx.draw(&Points {
        coords: &[(left, eye_y), (right, eye_y)],
        color: ALIEN_EYE,
    });
}

fn paint_scoreboard<H: Host>(ctx: &mut Context, app: &App<H>) {
    let vp = &app.viewport;
    let game = &app.game;
    let lines = ScoreLines::from_stats(&game.stats);
    let width = vp.screen_width as f64;
    let cell = vp.cell_width();
    let style = Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD);

    let score_x = width - MARGIN - lines.score.chars().count() as f64 * cell;
    ctx.print(score_x, vp.canvas_y(MARGIN), Span::styled(lines.score, style));

    let high_x = (width - lines.high_score.chars().count() as f64 * cell) / 2.0;
    ctx.print(high_x, vp.canvas_y(MARGIN), Span::styled(lines.high_score, style));

    let level_x = width - MARGIN - lines.level.chars().count() as f64 * cell;
    ctx.print(level_x, vp.canvas_y(MARGIN + 40.0), Span::styled(lines.level, style));

    let ship = game.ship.rect;
    for i in 0..game.stats.ships_left as i32 {
        let icon = geometry::Rect::new(10 + i * ship.width, 10, ship.width, ship.height);
        paint_ship(ctx, vp, &icon);
    }
}

fn paint_button(ctx: &mut Context, vp: &Viewport, button: &PlayButton) {
    let fill = rgb(button.button_color);
    fill_rect(ctx, vp, &button.rect, fill);
    let label_width = button.label.chars().count() as f64 * vp.cell_width();
    let label_x = button.rect.centerx() as f64 - label_width / 2.0;
    ctx.print(
        label_x,
        vp.canvas_y(button.rect.centery() as f64),
        Span::styled(
            button.label,
            Style::default()
                .fg(rgb(button.text_color))
                .bg(fill)
                .add_modifier(Modifier::BOLD),
        ),
    );
}

fn paint_banner<H: Host>(ctx: &mut Context, app: &App<H>) {
    let game = &app.game;
    let text = match game.phase() {
        Phase::Paused => "PAUSED",
        Phase::Inactive if game.stats.game_over => "GAME OVER",
        _ => return,
    };
    let vp = &app.viewport;
    let x = (vp.screen_width as f64 - text.chars().count() as f64 * vp.cell_width()) / 2.0;
    let y = (game.play_button.rect.top() - 40) as f64;
    ctx.print(
        x,
        vp.canvas_y(y),
        Span::styled(text, Style::default().fg(Color::Rgb(200, 40, 40)).add_modifier(Modifier::BOLD)),
    );
}

fn render_help(frame: &mut Frame, area: Rect, phase: Phase) {
    let key = Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::Rgb(100, 100, 130));
    let spans = match phase {
        Phase::Active => vec![
            Span::styled(" ←/→", key),
            Span::styled(" move  ", dim),
            Span::styled("Space", key),
            Span::styled(" fire  ", dim),
            Span::styled("P/Esc", key),
            Span::styled(" pause  ", dim),
            Span::styled("Q", key),
            Span::styled(" quit", dim),
        ],
        Phase::Paused => vec![
            Span::styled(" Enter/Space", key),
            Span::styled(" resume  ", dim),
            Span::styled("Click Play", key),
            Span::styled(" restart  ", dim),
            Span::styled("Q", key),
            Span::styled(" quit", dim),
        ],
        Phase::Inactive => vec![
            Span::styled(" Enter/Space", key),
            Span::styled(" or ", dim),
            Span::styled("Click Play", key),
            Span::styled(" to start  ", dim),
            Span::styled("Q", key),
            Span::styled(" quit", dim),
        ],
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
