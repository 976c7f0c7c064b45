//! Name generation for new birds.

use rand::Rng;

/// Pick a random name from the table.
pub fn random_name(rng: &mut impl Rng) -> String {
    NAMES[rng.gen_range(0..NAMES.len())].to_string()
}

static NAMES: &[&str] = &[
    "Sky", "Ash", "Cloud", "Marble", "Rusty", "Pepper", "Willow", "Scout", "Echo", "Drift",
    "Sadie", "Nyssa", "Brian", "Blakely", "Chops", "Luna", "Zephyr", "Talon", "Breeze", "Flint",
    "Raven", "Glimmer", "Dusk", "Flicker", "Haze", "Soot", "Cinder", "Storm", "Misty", "Shadow",
    "Blaze", "Sparrow", "Dawn", "Pebble", "Gust", "Feather", "Slate", "Drizzle", "Smoky", "Wisp",
    "Nimbus", "Quill", "Frost", "Ember", "Ripple", "Cobalt", "Sable", "Tide", "Boulder", "Sprout",
    "Gale", "Twilight", "Coral", "Saffron", "Jasper", "Onyx", "Thistle", "Vapor", "Crimson",
    "Fern", "Horizon", "Tundra", "Moss", "Ziggy", "Comet", "Dune", "Fog", "Canyon", "Velvet",
    "Whisper", "Bramble", "Star", "Clove", "Driftwood", "Hawk", "Ivy", "Cedar", "Noodle",
    "Pippin", "Clover", "Dandelion", "Maple", "Sienna", "Basil", "Thorn", "Glint", "Mica",
    "Fable", "Wren", "Topaz", "Biscuit", "Hopper", "Sage", "Coco", "Flurry", "Parchment",
    "Acorn", "Chalk", "Sooty", "Blossom", "Cricket", "Taffy", "Meadow", "Birch", "Sprig",
];
