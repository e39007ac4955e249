//! Start-room selection and per-room collectible scattering.

use crate::config::GeneratorConfig;
use crate::rng::LevelRng;
use crate::types::Pos;

use super::layout::RoomRect;
use super::model::Collectible;

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnPlan {
    pub start_room: usize,
    pub start: Pos,
    pub collectibles: Vec<Collectible>,
}

/// Returns `None` when there is no room to start in.
pub fn plan_spawns<R: LevelRng + ?Sized>(
    rooms: &[RoomRect],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<SpawnPlan> {
    if rooms.is_empty() {
        return None;
    }

    let start_room = rng.choose_index(rooms.len());
    let start = rooms[start_room].center();

    let mut collectibles = Vec::new();
    for room in rooms {
        let count = rng.range_inclusive(
            config.collectibles_per_room.min,
            config.collectibles_per_room.max,
        );
        for _ in 0..count {
            let cell = interior_cell(room, rng);
            collectibles.push(Collectible::in_cell(cell, config.tile_size));
        }
    }

    Some(SpawnPlan { start_room, start, collectibles })
}

fn interior_cell<R: LevelRng + ?Sized>(room: &RoomRect, rng: &mut R) -> Pos {
    let x = rng.range_inclusive(room.x + 1, room.right() - 1);
    let y = rng.range_inclusive(room.y + 1, room.bottom() - 1);
    Pos { y: y as i32, x: x as i32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;
    use crate::test_support::ScriptedRng;

    fn rooms() -> Vec<RoomRect> {
        vec![
            RoomRect { x: 2, y: 2, width: 5, height: 4 },
            RoomRect { x: 12, y: 3, width: 8, height: 6 },
            RoomRect { x: 3, y: 12, width: 10, height: 8 },
        ]
    }

    #[test]
    fn empty_room_list_has_no_plan() {
        let config = GeneratorConfig::default();
        assert_eq!(plan_spawns(&[], &config, &mut seeded_rng(1)), None);
    }

    #[test]
    fn start_is_center_of_chosen_room() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRng::new(vec![1]);
        let plan = plan_spawns(&rooms(), &config, &mut rng).expect("rooms are present");
        assert_eq!(plan.start_room, 1);
        assert_eq!(plan.start, Pos { y: 6, x: 16 });
    }

    #[test]
    fn collectibles_stay_inside_room_interiors() {
        let config = GeneratorConfig::default();
        let rooms = rooms();
        for seed in 0..100 {
            let plan = plan_spawns(&rooms, &config, &mut seeded_rng(seed)).expect("plan");
            assert!(plan.collectibles.len() >= rooms.len());
            assert!(plan.collectibles.len() <= rooms.len() * 3);
            for collectible in &plan.collectibles {
                assert!(
                    rooms.iter().any(|room| room.interior_contains(collectible.cell)),
                    "collectible {:?} is on a room border or outside every room (seed={seed})",
                    collectible.cell
                );
            }
        }
    }

    #[test]
    fn each_room_gets_its_own_count() {
        let config = GeneratorConfig::default();
        // start room, then (count, x, y...) per room in order
        let mut rng = ScriptedRng::new(vec![0, 1, 3, 4, 2, 13, 4, 18, 7]);
        let plan = plan_spawns(&rooms(), &config, &mut rng).expect("plan");
        let cells: Vec<Pos> = plan.collectibles.iter().map(|c| c.cell).collect();
        // The third room runs out of script and takes its minimum count and corner.
        assert_eq!(
            cells,
            vec![
                Pos { y: 4, x: 3 },
                Pos { y: 4, x: 13 },
                Pos { y: 7, x: 18 },
                Pos { y: 13, x: 4 },
            ]
        );
    }
}
