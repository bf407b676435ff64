use alien_invasion::audio::{AudioEvent, Music, SoundCue};
use alien_invasion::button::ButtonAction;
use alien_invasion::entities::{Alien, Bullet};
use alien_invasion::game::AlienInvasion;
use alien_invasion::settings::{Difficulty, Settings};

// Default field: 160x88 px, aliens 7x5, ship 9x6.
const FLEET_COLS: usize = 10;
const FLEET_ROWS: usize = 6;

fn new_game() -> AlienInvasion {
    AlienInvasion::new(Settings::default(), 0)
}

fn active_game() -> AlienInvasion {
    let mut game = new_game();
    game.start_game();
    game.drain_sounds();
    game
}

fn bullet_at(game: &AlienInvasion, x: f32, y: f32) -> Bullet {
    Bullet {
        x,
        y,
        width: game.settings.bullet_width,
        height: game.settings.bullet_height,
    }
}

fn far_alien(game: &AlienInvasion) -> Alien {
    Alien::new(&game.settings, 140.0, 20.0)
}

// ── Fleet construction ───────────────────────────────────────────────────────

#[test]
fn fleet_is_a_deterministic_grid() {
    let game = new_game();
    assert_eq!(game.aliens.len(), FLEET_COLS * FLEET_ROWS);

    let first = &game.aliens[0];
    assert_eq!((first.x, first.y), (7.0, 5.0));
    let last = &game.aliens[game.aliens.len() - 1];
    assert_eq!(last.x, 7.0 + 14.0 * (FLEET_COLS - 1) as f32);
    assert_eq!(last.y, 5.0 + 10.0 * (FLEET_ROWS - 1) as f32);

    let again = new_game();
    let a: Vec<(f32, f32)> = game.aliens.iter().map(|a| (a.x, a.y)).collect();
    let b: Vec<(f32, f32)> = again.aliens.iter().map(|a| (a.x, a.y)).collect();
    assert_eq!(a, b);
}

#[test]
fn tiny_field_still_gets_one_alien() {
    let settings = Settings { screen_width: 10.0, screen_height: 12.0, ..Settings::default() };
    let game = AlienInvasion::new(settings, 0);
    assert_eq!(game.aliens.len(), 1);
}

// ── Ship ─────────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_centered_on_bottom_edge() {
    let game = new_game();
    assert_eq!(game.ship.x, 75.5);
    assert_eq!(game.ship.bounds().bottom(), 88.0);
}

#[test]
fn ship_never_leaves_the_screen() {
    let mut game = active_game();
    game.ship.moving_right = true;
    for _ in 0..1000 {
        game.update_ship();
        assert!(game.ship.x <= 160.0 - 9.0);
    }
    assert_eq!(game.ship.x, 151.0);

    game.ship.moving_right = false;
    game.ship.moving_left = true;
    for _ in 0..1000 {
        game.update_ship();
        assert!(game.ship.x >= 0.0);
    }
    assert_eq!(game.ship.x, 0.0);
}

#[test]
fn both_flags_cancel_out() {
    let mut game = active_game();
    let x = game.ship.x;
    game.ship.moving_left = true;
    game.ship.moving_right = true;
    game.update_ship();
    assert_eq!(game.ship.x, x);
}

// ── Bullets ──────────────────────────────────────────────────────────────────

#[test]
fn fire_is_capped_at_bullets_allowed() {
    let mut game = active_game();
    assert!(game.fire_bullet());
    assert!(game.fire_bullet());
    assert!(game.fire_bullet());
    assert!(!game.fire_bullet());
    assert_eq!(game.bullets.len(), 3);
    let fired = game
        .drain_sounds()
        .into_iter()
        .filter(|s| *s == AudioEvent::Cue(SoundCue::Fire))
        .count();
    assert_eq!(fired, 3);
}

#[test]
fn no_firing_from_the_menu() {
    let mut game = new_game();
    assert!(!game.fire_bullet());
    assert!(game.bullets.is_empty());
}

#[test]
fn bullet_leaves_from_the_ship_nose() {
    let mut game = active_game();
    game.fire_bullet();
    let b = game.bullets[0].bounds();
    assert_eq!(b.center_x(), game.ship.bounds().center_x());
    assert_eq!(b.top(), game.ship.y);
}

#[test]
fn bullet_rises_until_its_bottom_passes_the_top() {
    let mut game = active_game();
    game.aliens = vec![far_alien(&game)];
    game.fire_bullet();

    // y starts at 82 with height 4 and speed 2: bottom reaches 0 after 43 ticks
    let mut last_y = game.bullets[0].y;
    for _ in 0..42 {
        game.update_bullets();
        assert_eq!(game.bullets.len(), 1);
        assert!(game.bullets[0].y < last_y);
        last_y = game.bullets[0].y;
    }
    assert!(game.bullets[0].bounds().bottom() > 0.0);
    game.update_bullets();
    assert!(game.bullets.is_empty());
}

// ── Fleet movement ───────────────────────────────────────────────────────────

#[test]
fn fleet_drops_and_reverses_at_the_right_edge() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![
        Alien::new(&s, 153.0, 20.0),
        Alien::new(&s, 100.0, 30.0),
    ];
    game.update_aliens();
    assert_eq!(game.settings.fleet_direction, -1.0);
    assert_eq!(game.aliens[0].y, 23.0);
    assert_eq!(game.aliens[1].y, 33.0);
    assert_eq!(game.aliens[0].x, 153.0 - s.alien_speed);
}

#[test]
fn fleet_drops_and_reverses_at_the_left_edge() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.settings.fleet_direction = -1.0;
    game.aliens = vec![Alien::new(&s, 0.0, 20.0)];
    game.update_aliens();
    assert_eq!(game.settings.fleet_direction, 1.0);
    assert_eq!(game.aliens[0].y, 23.0);
}

#[test]
fn fleet_keeps_course_away_from_edges() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 20.0)];
    game.update_aliens();
    assert_eq!(game.settings.fleet_direction, 1.0);
    assert_eq!(game.aliens[0].y, 20.0);
    assert_eq!(game.aliens[0].x, 50.0 + s.alien_speed);
}

#[test]
fn fleet_heading_away_from_an_edge_keeps_its_heading() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.settings.fleet_direction = -1.0;
    game.aliens = vec![Alien::new(&s, 153.0, 20.0)];
    game.update_aliens();
    assert_eq!(game.settings.fleet_direction, -1.0);
    assert_eq!(game.aliens[0].y, 23.0);

    // Clear of the edge now, so no further drops
    game.update_aliens();
    assert_eq!(game.settings.fleet_direction, -1.0);
    assert_eq!(game.aliens[0].y, 23.0);
}

// ── Collisions and scoring ───────────────────────────────────────────────────

#[test]
fn one_bullet_can_destroy_two_aliens() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![
        Alien::new(&s, 50.0, 20.0),
        Alien::new(&s, 56.0, 20.0),
        far_alien(&game),
    ];
    game.bullets = vec![bullet_at(&game, 55.0, 22.0)];

    let destroyed = game.check_bullet_alien_collisions();
    assert_eq!(destroyed, 2);
    assert_eq!(game.stats.score, 2 * s.alien_points);
    assert!(game.bullets.is_empty());
    assert_eq!(game.aliens.len(), 1);
    assert_eq!(game.aliens[0].x, 140.0);
    assert!(game.drain_sounds().contains(&AudioEvent::Cue(SoundCue::AlienDestroyed)));
}

#[test]
fn two_bullets_on_one_alien_score_it_once() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 20.0), far_alien(&game)];
    game.bullets = vec![bullet_at(&game, 51.0, 21.0), bullet_at(&game, 53.0, 22.0)];

    assert_eq!(game.check_bullet_alien_collisions(), 1);
    assert_eq!(game.stats.score, s.alien_points);
    assert!(game.bullets.is_empty());
}

#[test]
fn bullets_that_miss_survive() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 20.0), far_alien(&game)];
    game.bullets = vec![bullet_at(&game, 51.0, 21.0), bullet_at(&game, 100.0, 40.0)];

    game.check_bullet_alien_collisions();
    assert_eq!(game.bullets.len(), 1);
    assert_eq!(game.bullets[0].x, 100.0);
}

#[test]
fn scoring_raises_the_high_score() {
    let mut game = AlienInvasion::new(Settings::default(), 40);
    game.start_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 20.0), far_alien(&game)];
    game.bullets = vec![bullet_at(&game, 51.0, 21.0)];
    game.check_bullet_alien_collisions();
    assert_eq!(game.stats.high_score, 50);
    assert_eq!(game.scoreboard.high_score_text, "50");
}

// ── Level progression ────────────────────────────────────────────────────────

#[test]
fn clearing_the_fleet_starts_the_next_level() {
    let mut game = active_game();
    game.settings.alien_points = 10;
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 20.0)];
    game.bullets = vec![bullet_at(&game, 51.0, 21.0), bullet_at(&game, 120.0, 60.0)];

    game.check_bullet_alien_collisions();

    assert_eq!(game.stats.score, 10);
    assert_eq!(game.stats.level, 2);
    assert_eq!(game.scoreboard.level_text, "L2");
    assert_eq!(game.aliens.len(), FLEET_COLS * FLEET_ROWS);
    assert!(game.bullets.is_empty());
    assert!((game.settings.alien_speed - s.alien_speed * s.speedup_scale).abs() < 1e-6);
    assert!((game.settings.bullet_speed - s.bullet_speed * s.speedup_scale).abs() < 1e-6);
    assert!((game.settings.ship_speed - s.ship_speed * s.speedup_scale).abs() < 1e-6);
    assert_eq!(game.settings.alien_points, 15);
    assert!(game.stats.game_active);
}

#[test]
fn new_game_resets_speed_and_direction() {
    let mut game = active_game();
    game.start_new_level();
    game.settings.fleet_direction = -1.0;
    game.stats.score = 900;
    game.start_game();
    assert_eq!(game.settings.alien_speed, Settings::default().alien_speed);
    assert_eq!(game.settings.fleet_direction, 1.0);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.ships_left, 3);
}

// ── Losing ships ─────────────────────────────────────────────────────────────

#[test]
fn ship_hit_with_lives_left_restarts_the_round() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 50.0)];
    game.fire_bullet();
    game.ship.x = 3.0;

    game.ship_hit();

    assert_eq!(game.stats.ships_left, 2);
    assert!(game.stats.game_active);
    assert!(game.bullets.is_empty());
    assert_eq!(game.aliens.len(), FLEET_COLS * FLEET_ROWS);
    assert_eq!(game.ship.x, 75.5);
    assert!(game.is_stunned());
    assert_eq!(game.scoreboard.ships_text.chars().filter(|c| *c == '\u{25b2}').count(), 2);
}

#[test]
fn three_hits_end_a_three_ship_game() {
    let mut game = active_game();
    game.ship_hit();
    game.ship_hit();
    assert!(game.stats.game_active);
    assert_eq!(game.stats.ships_left, 1);

    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 50.0, 50.0)];
    game.drain_sounds();
    game.ship_hit();

    assert!(!game.stats.game_active);
    assert_eq!(game.stats.ships_left, 0);
    assert_eq!(game.aliens.len(), 1, "no fleet reset on game over");
    assert!(!game.is_stunned());
    let sounds = game.drain_sounds();
    assert!(sounds.contains(&AudioEvent::Cue(SoundCue::ShipHit)));
    assert_eq!(sounds.last(), Some(&AudioEvent::Music(Some(Music::Inactive))));

    // Further hits are ignored once the game is over
    game.ship_hit();
    assert_eq!(game.stats.ships_left, 0);
}

#[test]
fn alien_ramming_the_ship_costs_a_life() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, game.ship.x, game.ship.y - 2.0)];
    game.update_aliens();
    assert_eq!(game.stats.ships_left, 2);
}

#[test]
fn alien_landing_costs_a_life() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 10.0, 88.0 - 5.0)];
    game.update_aliens();
    assert_eq!(game.stats.ships_left, 2);
    assert_eq!(game.aliens.len(), FLEET_COLS * FLEET_ROWS);
}

#[test]
fn stun_freezes_the_world_then_resumes_music() {
    let mut game = active_game();
    game.ship_hit();
    game.drain_sounds();
    let positions: Vec<(f32, f32)> = game.aliens.iter().map(|a| (a.x, a.y)).collect();
    game.ship.moving_right = true;

    let ticks = game.settings.hit_pause_ticks();
    for _ in 0..ticks {
        assert!(game.is_stunned());
        assert!(!game.fire_bullet());
        game.update();
    }
    let after: Vec<(f32, f32)> = game.aliens.iter().map(|a| (a.x, a.y)).collect();
    assert_eq!(positions, after);
    assert_eq!(game.ship.x, 75.5);
    assert!(!game.is_stunned());
    assert_eq!(game.drain_sounds(), vec![AudioEvent::Music(Some(Music::Play))]);

    game.update();
    assert!(game.ship.x > 75.5);
}

// ── Menu buttons and difficulty ──────────────────────────────────────────────

#[test]
fn play_button_starts_the_game() {
    let mut game = new_game();
    let play = game.buttons[0].rect;
    let action = game.check_buttons(play.center_x(), play.y + 1.0);
    assert_eq!(action, Some(ButtonAction::Play));
    assert!(game.stats.game_active);
    assert_eq!(game.stats.games_played, 1);

    // Buttons are dead while playing
    assert_eq!(game.check_buttons(play.center_x(), play.y + 1.0), None);
}

#[test]
fn every_start_counts_as_a_game_played() {
    let mut game = new_game();
    assert_eq!(game.stats.games_played, 0);
    game.start_game();
    game.stats.game_active = false;
    game.start_game();
    assert_eq!(game.stats.games_played, 2);
}

#[test]
fn difficulty_button_sets_bullet_width_for_next_game() {
    let mut game = new_game();
    let hard = game.buttons[3].rect;
    let action = game.check_buttons(hard.center_x(), hard.y + 1.0);
    assert_eq!(action, Some(ButtonAction::Difficulty(Difficulty::Hard)));
    assert_eq!(game.settings.bullet_width, game.settings.hard_bullet_width);
    assert!(!game.stats.game_active);
    assert!(game.drain_sounds().contains(&AudioEvent::Cue(SoundCue::Hard)));

    game.start_game();
    assert_eq!(game.settings.difficulty(), Some(Difficulty::Hard));
    game.fire_bullet();
    assert_eq!(game.bullets[0].width, game.settings.hard_bullet_width);
}

#[test]
fn difficulty_cannot_change_mid_game() {
    let mut game = active_game();
    game.select_difficulty(Difficulty::Easy);
    assert_eq!(game.settings.difficulty(), Some(Difficulty::Medium));
    assert!(game.drain_sounds().is_empty());
}

#[test]
fn click_outside_buttons_does_nothing() {
    let mut game = new_game();
    assert_eq!(game.check_buttons(1.0, 1.0), None);
    assert!(!game.stats.game_active);
}

// ── Quit and resize ──────────────────────────────────────────────────────────

#[test]
fn quit_reports_best_score_of_the_session() {
    let mut game = AlienInvasion::new(Settings::default(), 300);
    game.start_game();
    game.stats.score = 450;
    game.scoreboard.check_high_score(&mut game.stats);
    game.start_game();
    game.stats.score = 100;
    assert_eq!(game.quit(), 450);
    let sounds = game.drain_sounds();
    assert!(sounds.contains(&AudioEvent::Cue(SoundCue::Quit)));
    assert!(sounds.contains(&AudioEvent::Music(None)));
}

#[test]
fn quit_keeps_stored_high_score_when_not_beaten() {
    let mut game = AlienInvasion::new(Settings::default(), 300);
    game.start_game();
    game.stats.score = 50;
    assert_eq!(game.quit(), 300);
}

#[test]
fn resize_scales_the_field() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 40.0, 20.0)];
    game.resize(320.0, 176.0);
    assert_eq!(game.settings.screen_width, 320.0);
    assert_eq!((game.aliens[0].x, game.aliens[0].y), (80.0, 40.0));
    assert_eq!(game.ship.x, 151.0);
    assert_eq!(game.ship.bounds().bottom(), 176.0);
    assert_eq!(game.buttons[0].rect.center_x(), 160.0);
}

#[test]
fn shrinking_keeps_aliens_inside_the_field() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 152.0, 20.0)];
    game.resize(80.0, 88.0);
    assert!(game.aliens[0].bounds().right() <= 80.0);

    for _ in 0..10 {
        game.update_aliens();
    }
    assert_eq!(game.aliens[0].y, 23.0, "one drop at the new edge, not one per tick");
    assert!(game.aliens[0].bounds().right() <= 80.0);
    assert_eq!(game.settings.fleet_direction, -1.0);
    assert_eq!(game.stats.ships_left, s.ship_limit);
}

#[test]
fn shrinking_keeps_aliens_above_the_ship() {
    let mut game = active_game();
    let s = game.settings.clone();
    game.aliens = vec![Alien::new(&s, 40.0, 78.0)];
    game.resize(160.0, 44.0);
    let alien = game.aliens[0].bounds();
    assert!(alien.bottom() <= game.ship.bounds().top());
    assert!(!alien.overlaps(&game.ship.bounds()));
}
