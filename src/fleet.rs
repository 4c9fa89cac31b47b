use crate::entities::Alien;

/// Horizontal heading shared by every alien in the fleet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    #[default]
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Aliens per row: one alien width of margin on each side and one alien
/// width between neighbours.
pub fn number_aliens_x(screen_width: i32, alien_width: i32) -> usize {
    if alien_width <= 0 {
        return 0;
    }
    let available = screen_width - 2 * alien_width;
    if available <= 0 {
        return 0;
    }
    (available / (2 * alien_width)) as usize
}

/// Rows that fit above the ship, leaving one alien height at the top and
/// two below the fleet.
pub fn number_rows(screen_height: i32, ship_height: i32, alien_height: i32) -> usize {
    if alien_height <= 0 {
        return 0;
    }
    let available = screen_height - 3 * alien_height - ship_height;
    if available <= 0 {
        return 0;
    }
    (available / (2 * alien_height)) as usize
}

pub fn alien_position(col: usize, row: usize, alien_width: i32, alien_height: i32) -> (i32, i32) {
    (
        alien_width + 2 * alien_width * col as i32,
        alien_height + 2 * alien_height * row as i32,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
    pub alien_width: i32,
    pub alien_height: i32,
}

impl FleetLayout {
    pub fn compute(
        screen_width: i32,
        screen_height: i32,
        ship_height: i32,
        alien_width: i32,
        alien_height: i32,
    ) -> Self {
        Self {
            columns: number_aliens_x(screen_width, alien_width),
            rows: number_rows(screen_height, ship_height, alien_height),
            alien_width,
            alien_height,
        }
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major positions.
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns)
                .map(move |col| alien_position(col, row, self.alien_width, self.alien_height))
        })
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    pub direction: FleetDirection,
}

impl Fleet {
    /// Replace the current aliens with a full grid. Direction is untouched.
    pub fn create(&mut self, layout: &FleetLayout) {
        self.aliens.clear();
        self.aliens.extend(
            layout
                .positions()
                .map(|(x, y)| Alien::new(x, y, layout.alien_width, layout.alien_height)),
        );
        tracing::debug!(
            rows = layout.rows,
            columns = layout.columns,
            "fleet created"
        );
    }

    /// If any alien touches a side, drop the whole fleet and reverse it.
    /// Happens at most once per call however many aliens are at an edge.
    pub fn check_edges(&mut self, screen_width: i32, drop_distance: i32) -> bool {
        if !self.aliens.iter().any(|a| a.check_edges(screen_width)) {
            return false;
        }
        for alien in &mut self.aliens {
            alien.drop_by(drop_distance);
        }
        self.direction = self.direction.flipped();
        true
    }

    pub fn update(&mut self, speed: f32) {
        let direction = self.direction;
        for alien in &mut self.aliens {
            alien.update(speed, direction);
        }
    }

    pub fn reset_direction(&mut self) {
        self.direction = FleetDirection::Right;
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_counts_for_800_by_600() {
        assert_eq!(number_aliens_x(800, 20), 19);
        assert_eq!(number_rows(600, 40, 20), 12);
    }

    #[test]
    fn layout_counts_for_defaults() {
        let layout = FleetLayout::compute(1200, 800, 48, 60, 58);
        assert_eq!(layout.columns, 9);
        assert_eq!(layout.rows, 4);
        assert_eq!(layout.len(), 36);
    }

    #[test]
    fn non_positive_space_gives_empty_layout() {
        assert_eq!(number_aliens_x(30, 20), 0);
        assert_eq!(number_aliens_x(40, 20), 0);
        assert_eq!(number_rows(50, 40, 20), 0);
        assert_eq!(number_aliens_x(800, 0), 0);
        assert_eq!(number_rows(600, 40, 0), 0);
        assert!(FleetLayout::compute(50, 50, 40, 20, 20).is_empty());
    }

    #[test]
    fn positions_leave_one_alien_of_spacing() {
        assert_eq!(alien_position(0, 0, 20, 30), (20, 30));
        assert_eq!(alien_position(1, 0, 20, 30), (60, 30));
        assert_eq!(alien_position(2, 3, 20, 30), (100, 210));
    }

    #[test]
    fn create_fills_grid_row_major() {
        let layout = FleetLayout::compute(800, 600, 40, 20, 20);
        let mut fleet = Fleet::default();
        fleet.create(&layout);
        assert_eq!(fleet.len(), 19 * 12);
        assert_eq!(fleet.aliens[0].rect.x, 20);
        assert_eq!(fleet.aliens[1].rect.x, 60);
        assert_eq!(fleet.aliens[19].rect.y, 60);
        let bottom = fleet.aliens.iter().map(|a| a.rect.bottom()).max().unwrap();
        assert!(bottom <= 600 - 40 - 20);
    }

    #[test]
    fn edge_drop_happens_once_with_many_aliens_at_edges() {
        let mut fleet = Fleet::default();
        fleet.aliens = vec![
            Alien::new(0, 10, 20, 20),
            Alien::new(100, 10, 20, 20),
            Alien::new(180, 40, 20, 20),
        ];
        assert!(fleet.check_edges(200, 10));
        assert_eq!(fleet.direction, FleetDirection::Left);
        let ys: Vec<i32> = fleet.aliens.iter().map(|a| a.rect.y).collect();
        assert_eq!(ys, vec![20, 20, 50]);
    }

    #[test]
    fn no_drop_away_from_edges() {
        let mut fleet = Fleet::default();
        fleet.aliens = vec![Alien::new(50, 10, 20, 20)];
        assert!(!fleet.check_edges(200, 10));
        assert_eq!(fleet.direction, FleetDirection::Right);
        assert_eq!(fleet.aliens[0].rect.y, 10);
    }

    #[test]
    fn whole_fleet_moves_together() {
        let mut fleet = Fleet::default();
        fleet.aliens = vec![Alien::new(50, 10, 20, 20), Alien::new(90, 10, 20, 20)];
        fleet.direction = FleetDirection::Left;
        fleet.update(3.0);
        assert_eq!(fleet.aliens[0].rect.x, 47);
        assert_eq!(fleet.aliens[1].rect.x, 87);
    }
}
