pub const PORTRAIT: &str = "https://via.placeholder.com/600x800/1a1a1a/ffffff?text=Michael+Andrade";

pub const BIO: [&str; 3] = [
    "Creative director and visual storyteller with over a decade of experience \
     crafting compelling narratives across digital and traditional media.",
    "My work bridges the gap between artistic vision and commercial success, \
     delivering cinematic experiences that resonate with audiences and elevate brands.",
    "From concept to execution, I specialize in creating immersive visual stories \
     that push creative boundaries while maintaining strategic focus.",
];

pub const SKILLS: [&str; 8] = [
    "Creative Direction",
    "Film Production",
    "Visual Storytelling",
    "Brand Strategy",
    "Motion Design",
    "Photography",
    "Post-Production",
    "Art Direction",
];
