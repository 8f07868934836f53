//! Static flavor tables the generator samples from.
//!
//! Races cover the full set the Race relation config knows about (see
//! `config.rs`), plus "lizardfolk" which is displayed in gendered form
//! ("lizardman"/"lizardwoman") and therefore never appears verbatim in a
//! record.

/// Race keys as they appear in generated records. Lowercase on purpose —
/// the normalizer and the relation lookup both match on the lowercase key.
pub const RACES: &[&str] = &[
    "aasimar",
    "dragonborn",
    "dwarf",
    "mountain dwarf",
    "hill dwarf",
    "elf",
    "drow",
    "high elf",
    "wood elf",
    "firbolg",
    "gnome",
    "forest gnome",
    "rock gnome",
    "goblin",
    "goliath",
    "halfling",
    "lightfoot halfling",
    "stout halfling",
    "half-elf",
    "half-orc",
    "human",
    "kenku",
    "lizardfolk",
    "orc",
    "tabaxi",
    "tiefling",
    "triton",
];

pub const MALE_NAMES: &[&str] = &[
    "Aldric", "Bram", "Cassian", "Doran", "Edmund", "Fenwick", "Garrick", "Hadrian", "Ivo",
    "Jorah", "Kellen", "Lucan", "Merek", "Nikolai", "Osric", "Percival", "Roderick", "Soren",
    "Tobias", "Ulric",
];

pub const FEMALE_NAMES: &[&str] = &[
    "Adela", "Brenna", "Cordelia", "Delia", "Elsbeth", "Freya", "Gwendolyn", "Helena", "Isolde",
    "Junia", "Katriana", "Lyra", "Maeve", "Nessa", "Ottilie", "Petra", "Rosalind", "Seraphine",
    "Thessaly", "Verity",
];

/// Kenku are named after sounds they mimic.
pub const KENKU_NAMES: &[&str] = &[
    "Clatter of Falling Pots",
    "Rusted Hinge",
    "Wind Through Reeds",
    "Boot on Gravel",
    "Dripping Cellar",
    "Snapping Twig",
    "Market Bell",
    "Whetstone Scrape",
    "Kettle Whistle",
    "Rain on Canvas",
];

pub const OCCUPATIONS: &[&str] = &[
    "blacksmith",
    "innkeeper",
    "herbalist",
    "fishmonger",
    "caravan guard",
    "scribe",
    "moneylender",
    "gravedigger",
    "rat catcher",
    "chandler",
    "midwife",
    "stonemason",
    "falconer",
    "cartographer",
    "tanner",
    "street performer",
    "apothecary",
    "ferryman",
    "pig farmer",
    "town crier",
];

pub const HAIR_STYLES: &[&str] = &[
    "long, braided",
    "short, curly",
    "shoulder-length",
    "close-cropped",
    "wild, unkempt",
    "slicked-back",
    "thinning",
];

pub const HAIR_COLORS: &[&str] = &[
    "black", "brown", "auburn", "blond", "silver", "grey", "copper", "white",
];

pub const EYE_COLORS: &[&str] = &[
    "brown", "hazel", "green", "grey", "blue", "amber", "violet",
];

pub const SKIN_TONES: &[&str] = &[
    "pale",
    "fair",
    "olive",
    "tanned",
    "weathered",
    "ruddy",
    "dark",
    "scarred",
];

pub const BUILDS: &[&str] = &[
    "a wiry build",
    "a stocky build",
    "a muscular build",
    "a lean build",
    "a heavyset build",
    "a slight build",
];

pub const FACES: &[&str] = &[
    "a round face with soft features",
    "a narrow face with sharp cheekbones",
    "a square jaw and a broken nose",
    "a long face with deep-set eyes",
    "an angular face with a pointed chin",
    "a broad, friendly face",
];

/// Full sentences, appended to the description only when rolled.
pub const SPECIAL_FEATURES: &[&str] = &[
    "A jagged scar runs from temple to jaw.",
    "An old brand on the forearm has been burned over twice.",
    "Three fingers on the left hand end at the second knuckle.",
    "A milky film clouds one eye.",
    "Faded tattoos wind up both arms.",
    "One ear is notched like a stray cat's.",
    "A limp favors the right leg in cold weather.",
    "A songbird's skull hangs from a cord around the neck.",
];

pub const TRAITS: &[&str] = &[
    "Quick to laugh and quicker to forgive.",
    "Counts coins twice and strangers three times.",
    "Speaks in a near-whisper regardless of company.",
    "Collects grudges the way others collect keepsakes.",
    "Never sits with a back to the door.",
    "Treats every promise as a binding oath.",
    "Hums old marching songs while working.",
    "Answers questions with questions.",
    "Feeds every stray animal in the district.",
    "Keeps a meticulous journal of slights and favors.",
    "Haggles over everything, even gifts.",
    "Trusts omens more than witnesses.",
    "Apologizes constantly, sincerely, and unnecessarily.",
    "Remembers every name and every debt.",
    "Laughs at funerals and weeps at weddings.",
    "Refuses to speak ill of the dead, even the deserving.",
];

/// Trait slot used when the record's race is lizardman or lizardwoman.
pub const LIZARDFOLK_TRAITS: &[&str] = &[
    "Appraises new acquaintances by how much meat they carry.",
    "Sees sentiment as a soft-skin affliction to be tolerated.",
    "Wastes nothing; every kill is tools, food, and trade.",
    "Finds dry-land customs baffling but mimics them carefully.",
];

/// Trait slot used when the record's race is goliath.
pub const GOLIATH_TRAITS: &[&str] = &[
    "Keeps a running tally of every contest won and lost.",
    "Respects only those who pull their own weight.",
    "Treats every task as a challenge to be scored.",
    "Speaks bluntly and expects the same in return.",
];

pub const RELIGIONS: &[&str] = &[
    "Quietly devout, leaving a coin at every roadside shrine.",
    "Openly scornful of the gods and their keepers.",
    "Keeps the old rites the grandparents kept, out of habit more than faith.",
    "Prays loudly and publicly, mostly for an audience.",
    "Believes the gods watch but do not care.",
    "Tithes faithfully to one temple and spies for another.",
    "Converted after a near drowning and never misses a service.",
    "Worships no god but keeps a lucky knucklebone close.",
];

/// Quirk sentences. Terminal punctuation varies on purpose — the formatter
/// splits on `.`, `!` and `?`.
pub const QUIRKS: &[&str] = &[
    "Bites the rim of a cup before drinking from it.",
    "Always pays in exact change!",
    "Quotes a dead mentor at least once a conversation.",
    "Refuses to cross running water after dark.",
    "Names every horse, even other people's.",
    "Taps the doorframe twice when entering a room.",
    "Will not eat food that touches other food?",
    "Sharpens knives that are already sharp.",
    "Keeps spare buttons in every pocket.",
    "Whistles the same four notes when nervous.",
    "Claims to have met the king. The story changes every time.",
    "Salutes magpies and insists you do the same!",
];

pub const ORIENTATIONS: &[&str] = &[
    "heterosexual",
    "homosexual",
    "bisexual",
    "asexual",
];

pub const STATUSES: &[&str] = &[
    "single",
    "married",
    "widowed",
    "betrothed",
    "estranged",
    "it's complicated",
];

pub const HOOKS: &[&str] = &[
    "Owes a dangerous sum to a lender who has stopped sending letters and started sending people.",
    "Found a sealed military dispatch in a dead traveler's boot and hasn't decided who to sell it to.",
    "Is paying two different priests to lift the same curse, and both claim it's working.",
    "Keeps a locked cellar room and pays the rat catcher triple to stay out of it.",
    "Received a letter from a sibling who died nine years ago, postmarked last month.",
    "Witnessed the magistrate's carriage leave town the night of the granary fire.",
    "Has been promised a title if a certain caravan never reaches the capital.",
    "Buys every map of the northern passes, burns the inaccurate ones, and keeps none.",
    "Wears a ring taken from a battlefield corpse; its twin was spotted on a living man's hand.",
    "Smuggles medicine past the quarantine line and is starting to wonder what else is in the crates.",
];
