//! Word lists compiled into the binary.

/// Backfill words used when a difficulty list cannot supply enough words
/// that fit the grid.
pub const FALLBACK_WORDS: &[&str] = &[
    "GAME", "WORD", "FIND", "PLAY", "GRID", "PUZZLE", "SEARCH", "SOLVE", "TIME", "LOVE", "FUN",
    "BOOK", "HOME",
];

pub const EASY: &[&str] = &[
    "WORD", "GAME", "PLAY", "FIND", "GRID", "LIST", "TIME", "LOVE", "BOOK", "HOME",
    "FIRE", "FOOD", "WATER", "LIFE", "WORK", "CARE", "MOON", "STAR", "SUN", "TREE",
    "HOUSE", "MUSIC", "COLOR", "SOUND", "LIGHT", "DARK", "SOFT", "HARD", "FAST", "SLOW",
    "HIGH", "LOW", "HOT", "COLD", "WARM", "COOL", "NEW", "OLD", "BIG", "SMALL",
    "GOOD", "BAD", "HAPPY", "SAD", "RICH", "POOR", "WISE", "FOOL", "KIND", "MEAN",
    "CITY", "TOWN", "ROAD", "PATH", "DOOR", "WINDOW", "TABLE", "CHAIR", "BED", "SOFA",
    "FISH", "BIRD", "CAT", "DOG", "LION", "BEAR", "DEER", "WOLF", "FOX", "RABBIT",
    "APPLE", "PEAR", "GRAPE", "BANANA", "MANGO", "LEMON", "PEACH", "BERRY", "MELON", "KIWI",
    "EARTH", "MARS", "VENUS", "JUPITER", "SATURN", "PLUTO", "COMET",
];

pub const MEDIUM: &[&str] = &[
    "PUZZLE", "SEARCH", "CHALLENGE", "SOLUTION", "HORIZONTAL", "VERTICAL", "DIAGONAL",
    "BACKWARD", "FORWARD", "LOCATE", "DISCOVER", "EXPLORE", "MYSTERY", "PATTERN",
    "COMPLETE", "PROGRESS", "VICTORY", "SUCCESS", "ACHIEVE", "ACCOMPLISH", "ELEPHANT",
    "BUTTERFLY", "CHOCOLATE", "MOUNTAIN", "OCEAN", "UNIVERSE", "ADVENTURE", "BEAUTIFUL",
    "CELEBRATION", "KNOWLEDGE", "IMAGINATION", "MAGNIFICENT", "OPPORTUNITY", "REMARKABLE",
    "SIGNIFICANT", "TREMENDOUS", "WONDERFUL", "LIBRARY", "SCHOOL", "COLLEGE", "UNIVERSITY",
    "TEACHER", "STUDENT", "PENCIL", "PAPER", "NOTEBOOK", "COMPUTER", "KEYBOARD", "MONITOR",
    "GARDEN", "FLOWER", "FOREST", "RIVER", "VALLEY", "DESERT", "ISLAND", "BEACH", "CLOUD",
    "WEATHER", "SEASON", "WINTER", "SUMMER", "SPRING", "AUTUMN", "HOLIDAY", "FESTIVAL",
    "FAMILY", "FRIEND", "PARENT", "CHILD", "SIBLING", "COUSIN", "GRANDPA", "GRANDMA",
    "MORNING", "EVENING", "NIGHT", "MIDNIGHT", "SUNRISE", "SUNSET", "TWILIGHT", "DAWN",
];

pub const HARD: &[&str] = &[
    "DETERMINATION", "ENTHUSIASTIC", "EXTRAORDINARY", "FANTASTIC", "KNOWLEDGEABLE",
    "PERSEVERANCE", "UNFORGETTABLE", "VOLUNTEER", "XENOPHILE", "YOUTHFUL", "ZEALOUS",
    "ARCHITECTURE", "ENGINEERING", "TECHNOLOGY", "SCIENCE", "MATHEMATICS", "CHEMISTRY",
    "BIOLOGY", "PHYSICS", "ASTRONOMY", "GEOGRAPHY", "HISTORY", "LITERATURE", "PHILOSOPHY",
    "PSYCHOLOGY", "SOCIOLOGY", "ECONOMICS", "POLITICS", "GOVERNMENT", "DEMOCRACY",
    "CONSTITUTION", "REVOLUTION", "EVOLUTION", "INVENTION", "DISCOVERY", "EXPLORATION",
    "COMMUNICATION", "TRANSPORTATION", "EDUCATION", "INFORMATION", "TELECOMMUNICATION",
    "INTERNATIONAL", "MULTINATIONAL", "ORGANIZATION", "INSTITUTION", "ASSOCIATION",
    "COOPERATION", "COLLABORATION", "PARTICIPATION", "CELEBRATION", "CONGRATULATIONS",
    "ENVIRONMENTAL", "SUSTAINABLE", "RENEWABLE", "BIODIVERSITY", "CONSERVATION",
    "PHOTOGRAPHY", "CINEMATOGRAPHY", "ILLUSTRATION", "ANIMATION", "PRODUCTION",
    "PERFORMANCE", "EXHIBITION", "COMPETITION", "CHAMPIONSHIP", "TOURNAMENT",
];
