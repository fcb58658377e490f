//! # Catalog — Pre-Assembled Sprites
//!
//! One function per recipe. Every recipe returns a sprite placed at the
//! caller's position whose children sit at offsets expressed as fractions of
//! `size`, so the same recipe works at any scale. Colors are parameters
//! where the look varies between uses; fixed details (eyes, windows, wheels)
//! use palette constants.
//!
//! [`all_2d`] lists every 2D recipe with gallery-friendly default arguments.
//!
//! ```ignore
//! let mut stack = TransformStack::new();
//! catalog::house(Vec2::new(200.0, 300.0), 80.0, Color::MAROON, Color::DARKBROWN)
//!     .draw(&mut canvas, &mut stack);
//! ```

pub mod characters;
pub mod environment;
pub mod fruit;
pub mod items;
#[cfg(feature = "render3d")]
pub mod models3d;
pub mod monsters;
pub mod ui;
pub mod vehicles;

pub use characters::*;
pub use environment::*;
pub use fruit::*;
pub use items::*;
#[cfg(feature = "render3d")]
pub use models3d::*;
pub use monsters::*;
pub use ui::*;
pub use vehicles::*;

use crate::color::Color;
use crate::math::Vec2;
use crate::shapes::Shape2d;
use crate::sprite::Sprite2d;

/// Gallery grouping of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Characters,
    Monsters,
    Environment,
    Vehicles,
    Items,
    Fruit,
    Ui,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Characters => "Characters",
            Category::Monsters => "Monsters",
            Category::Environment => "Environment",
            Category::Vehicles => "Vehicles",
            Category::Items => "Items",
            Category::Fruit => "Fruit",
            Category::Ui => "UI",
        }
    }
}

/// A recipe with default arguments filled in.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: Category,
    /// Builds the sprite at the given position.
    pub build: fn(Vec2) -> Sprite2d,
}

/// Every 2D recipe, grouped by category.
pub fn all_2d() -> Vec<CatalogEntry> {
    use Category::*;

    macro_rules! entry {
        ($name:literal, $cat:expr, |$p:ident| $body:expr) => {
            CatalogEntry {
                name: $name,
                category: $cat,
                build: |$p| $body,
            }
        };
    }

    vec![
        entry!("Simple Character", Characters, |p| simple_character(p, 60.0, Color::BLUE, Color::RED)),
        entry!("Robot", Characters, |p| robot_character(p, 60.0, Color::DARKGRAY, Color::GREEN)),
        entry!("Animal", Characters, |p| animal_character(p, 60.0, Color::ORANGE, Color::BLACK)),
        entry!("Soldier", Characters, |p| soldier(p, 60.0, Color::GREEN, Color::BEIGE)),
        entry!("Wizard", Characters, |p| wizard(p, 60.0, Color::PURPLE, Color::BLUE)),
        entry!("Snowman", Characters, |p| snowman(p, 70.0, Color::WHITE, Color::BLACK)),
        entry!("Horse", Characters, |p| horse(p, 35.0, Color::BROWN)),
        entry!("Ghost", Monsters, |p| ghost(p, 60.0, Color::PURPLE)),
        entry!("Zombie", Monsters, |p| zombie(p, 60.0, Color::BEIGE, Color::DARKGREEN)),
        entry!("Skeleton", Monsters, |p| skeleton_sprite(p, 70.0, Color::RAYWHITE)),
        entry!("Frankenstein", Monsters, |p| frankenstein(p, 60.0, Color::LIME, Color::DARKGRAY)),
        entry!("Dracula", Monsters, |p| dracula(p, 60.0, Color::MAROON, Color::LIGHTGRAY)),
        entry!("Werewolf", Monsters, |p| werewolf(p, 60.0, Color::BROWN, Color::YELLOW)),
        entry!("Mummy", Monsters, |p| mummy(p, 60.0, Color::BEIGE, Color::RED)),
        entry!("Dragon", Monsters, |p| dragon(p, 60.0, Color::RED, Color::ORANGE)),
        entry!("Tree", Environment, |p| simple_tree(p, 80.0, Color::BROWN, Color::GREEN)),
        entry!("Cloud", Environment, |p| cloud(p, 60.0, Color::WHITE)),
        entry!("House", Environment, |p| house(p, 80.0, Color::MAROON, Color::DARKBROWN)),
        entry!("Castle", Environment, |p| castle(p, 80.0, Color::GRAY, Color::DARKBLUE)),
        entry!("Bush", Environment, |p| bush(p, 60.0, Color::DARKGREEN)),
        entry!("Rock", Environment, |p| rock(p, 70.0, Color::GRAY)),
        entry!("Flower", Environment, |p| flower(p, 60.0, Color::PINK, Color::YELLOW)),
        entry!("Waterfall", Environment, |p| waterfall(p, 60.0, 90.0, Color::SKYBLUE)),
        entry!("Portal", Environment, |p| portal(p, 70.0, Color::PURPLE, Color::BLUE)),
        entry!("Car", Vehicles, |p| car(p, 70.0, Color::RED, Color::BLACK)),
        entry!("Tank", Vehicles, |p| tank(p, 70.0, Color::GREEN, Color::DARKGRAY)),
        entry!("Motorcycle", Vehicles, |p| motorcycle(p, 70.0, Color::BLUE, Color::BLACK)),
        entry!("Skateboard", Vehicles, |p| skateboard(p, 70.0, Color::YELLOW, Color::BLACK)),
        entry!("Sailboat", Vehicles, |p| sailboat(p, 70.0, Color::BROWN, Color::WHITE)),
        entry!("Airplane", Vehicles, |p| airplane(p, 70.0, Color::SKYBLUE, Color::WHITE)),
        entry!("UFO", Vehicles, |p| ufo(p, 70.0, Color::GRAY, Color::GREEN)),
        entry!("Cannon", Vehicles, |p| cannon(p, 70.0, Color::DARKGRAY, Color::BLACK)),
        entry!("Sword", Items, |p| sword(p, 70.0, Color::LIGHTGRAY, Color::BROWN)),
        entry!("Arrow", Items, |p| arrow_sprite(p, 70.0, Color::BROWN, Color::RED)),
        entry!("Star", Items, |p| star_sprite(p, 50.0, Color::GOLD)),
        entry!("Yellow Star", Items, |p| yellow_star(p, 50.0)),
        entry!("Coin", Items, |p| coin(p, 70.0, Color::GOLD)),
        entry!("Key", Items, |p| key(p, 70.0, Color::GOLD)),
        entry!("Shield", Items, |p| shield(p, 70.0, Color::BROWN, Color::GOLD)),
        entry!("Crown", Items, |p| crown(p, 70.0, Color::GOLD, Color::RED)),
        entry!("Lightning", Items, |p| lightning_bolt(p, 70.0, Color::YELLOW)),
        entry!("Fish", Items, |p| fish(p, 70.0, Color::SKYBLUE, Color::BLUE)),
        entry!("Gem", Items, |p| gem(p, 70.0, Color::PURPLE)),
        entry!("Explosion", Items, |p| explosion(p, 70.0, Color::ORANGE, Color::YELLOW)),
        entry!("Treasure Chest", Items, |p| treasure_chest(p, 70.0, Color::BROWN, Color::GOLD, true)),
        entry!("Potion", Items, |p| potion(p, 70.0, Color::SKYBLUE, Color::PURPLE)),
        entry!("Apple", Fruit, |p| apple(p, 60.0, Color::RED, Color::BROWN)),
        entry!("Banana", Fruit, |p| banana(p, 60.0, Color::YELLOW, Color::BROWN)),
        entry!("Orange", Fruit, |p| orange(p, 60.0, Color::ORANGE, Color::DARKGREEN)),
        entry!("Watermelon", Fruit, |p| watermelon(p, 70.0, Color::DARKGREEN, Color::RED, Color::BLACK)),
        entry!("Grape", Fruit, |p| grape(p, 40.0, Color::PURPLE, Color::BROWN)),
        entry!("Grapes", Fruit, |p| grapes(p, 60.0, Color::VIOLET, Color::BROWN)),
        entry!("Button", Ui, |p| button(p, Vec2::new(80.0, 40.0), Color::SKYBLUE, Color::BLUE)),
        entry!("Health Bar", Ui, |p| health_bar(p, 100.0, 0.75, Color::RED, Color::GREEN)),
    ]
}

/// Find a 2D recipe by its gallery name (case-insensitive).
pub fn find_2d(name: &str) -> Option<CatalogEntry> {
    all_2d().into_iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Build a sprite at `position` from `shapes`, in paint order.
pub(crate) fn assemble(name: &str, position: Vec2, shapes: Vec<Shape2d>) -> Sprite2d {
    log::debug!("{name}: {} shapes at ({}, {})", shapes.len(), position.x, position.y);
    let mut sprite = Sprite2d::new(shapes.len()).at(position);
    for shape in shapes {
        sprite.add_shape(shape);
    }
    sprite
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TransformStack;
    use crate::render2d::DrawList;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let entries = all_2d();
        let names: HashSet<_> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn every_category_is_populated() {
        let cats: HashSet<_> = all_2d().iter().map(|e| e.category).collect();
        assert_eq!(cats.len(), 7);
    }

    #[test]
    fn every_recipe_builds_at_its_position_and_draws_balanced() {
        let at = Vec2::new(123.0, 45.0);
        for entry in all_2d() {
            let sprite = (entry.build)(at);
            assert_eq!(sprite.position, at, "{}", entry.name);
            assert!(sprite.shape_count() > 0, "{} is empty", entry.name);

            let mut list = DrawList::new();
            let mut stack = TransformStack::new();
            sprite.draw(&mut list, &mut stack);
            assert_eq!(stack.depth(), 0, "{}", entry.name);
            assert!(!list.is_empty(), "{} drew nothing", entry.name);
            assert!(
                list.vertices().iter().all(|v| v.position.iter().all(|c| c.is_finite())),
                "{} produced non-finite geometry",
                entry.name
            );
        }
    }

    #[test]
    fn find_by_name() {
        assert!(find_2d("health bar").is_some());
        assert!(find_2d("nope").is_none());
    }
}
