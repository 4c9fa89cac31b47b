//! Group collision helpers. Matches are collected first and removals applied
//! afterwards, so no group is mutated while it is being scanned.

use crate::entities::{Alien, Bullet, Ship};
use crate::geometry::{Rect, Sprite};

pub fn sprite_collide_any<T: Sprite>(rect: &Rect, group: &[T]) -> bool {
    group.iter().any(|s| rect.colliderect(&s.rect()))
}

/// Index pairs `(a, b)` of colliding members. Each `a` claims at most its
/// first overlapping `b`, and each `b` is claimed by the first `a` that
/// reaches it.
pub fn group_collide<A: Sprite, B: Sprite>(a: &[A], b: &[B]) -> Vec<(usize, usize)> {
    let mut claimed = vec![false; b.len()];
    let mut hits = Vec::new();
    for (ai, sa) in a.iter().enumerate() {
        let ra = sa.rect();
        let target = b
            .iter()
            .enumerate()
            .find(|(bi, sb)| !claimed[*bi] && ra.colliderect(&sb.rect()));
        if let Some((bi, _)) = target {
            claimed[bi] = true;
            hits.push((ai, bi));
        }
    }
    hits
}

/// Remove the members at `indices`, preserving the order of the survivors.
pub fn remove_indices<T>(group: &mut Vec<T>, indices: &[usize]) {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    for &i in sorted.iter().rev() {
        if i < group.len() {
            group.remove(i);
        }
    }
}

/// Destroy-both resolution. Returns the number of aliens destroyed.
pub fn bullet_alien_collisions(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    let hits = group_collide(bullets.as_slice(), aliens.as_slice());
    if hits.is_empty() {
        return 0;
    }
    let (used, killed): (Vec<usize>, Vec<usize>) = hits.iter().copied().unzip();
    remove_indices(bullets, &used);
    remove_indices(aliens, &killed);
    hits.len()
}

pub fn ship_collides(ship: &Ship, aliens: &[Alien]) -> bool {
    sprite_collide_any(&ship.rect, aliens)
}

pub fn aliens_reached_bottom(aliens: &[Alien], screen_height: i32) -> bool {
    aliens.iter().any(|a| a.rect.bottom() >= screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Rgb;

    const GREY: Rgb = Rgb(60, 60, 60);

    #[test]
    fn destroy_both_removes_bullet_and_alien() {
        let mut bullets = vec![Bullet::at(Rect::new(105, 105, 3, 15), GREY)];
        let mut aliens = vec![Alien::new(100, 100, 20, 20), Alien::new(300, 100, 20, 20)];
        assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 1);
        assert!(bullets.is_empty());
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].rect.x, 300);
    }

    #[test]
    fn bullet_does_not_penetrate_overlapping_aliens() {
        let mut bullets = vec![Bullet::at(Rect::new(115, 100, 10, 15), GREY)];
        let mut aliens = vec![Alien::new(100, 100, 20, 20), Alien::new(120, 100, 20, 20)];
        assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 1);
        assert_eq!(aliens.len(), 1);
        assert_eq!(aliens[0].rect.x, 120);
    }

    #[test]
    fn second_bullet_on_same_alien_survives() {
        let mut bullets = vec![
            Bullet::at(Rect::new(105, 105, 3, 15), GREY),
            Bullet::at(Rect::new(110, 102, 3, 15), GREY),
        ];
        let mut aliens = vec![Alien::new(100, 100, 20, 20)];
        assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 1);
        assert!(aliens.is_empty());
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].rect.x, 110);
    }

    #[test]
    fn misses_leave_groups_untouched() {
        let mut bullets = vec![Bullet::at(Rect::new(0, 0, 3, 15), GREY)];
        let mut aliens = vec![Alien::new(100, 100, 20, 20)];
        assert_eq!(bullet_alien_collisions(&mut bullets, &mut aliens), 0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(aliens.len(), 1);
    }

    #[test]
    fn any_hit_needs_real_overlap() {
        let probe = Rect::new(10, 10, 10, 10);
        assert!(sprite_collide_any(&probe, &[Rect::new(0, 0, 5, 5), Rect::new(19, 19, 5, 5)]));
        // Touching edges do not count.
        assert!(!sprite_collide_any(&probe, &[Rect::new(20, 10, 5, 5), Rect::new(10, 0, 5, 10)]));
        assert!(!sprite_collide_any::<Rect>(&probe, &[]));
    }

    #[test]
    fn remove_indices_keeps_order_and_ignores_duplicates() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        remove_indices(&mut v, &[3, 1, 3, 9]);
        assert_eq!(v, vec!['a', 'c', 'e']);
    }

    #[test]
    fn bottom_reached_when_alien_bottom_meets_screen_bottom() {
        let aliens = vec![Alien::new(0, 780, 20, 20)];
        assert!(aliens_reached_bottom(&aliens, 800));
        let aliens = vec![Alien::new(0, 779, 20, 20)];
        assert!(!aliens_reached_bottom(&aliens, 800));
    }
}
