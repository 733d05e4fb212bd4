//! The built-in job list: one prompt per image the site references

use std::fmt;
use std::path::{Path, PathBuf};

/// Aspect ratios accepted by the image model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Wide,
    Square,
    Tall,
    Classic,
    Portrait,
}

impl AspectRatio {
    /// Value sent as `imageConfig.aspectRatio`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wide => "16:9",
            Self::Square => "1:1",
            Self::Tall => "9:16",
            Self::Classic => "4:3",
            Self::Portrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    /// File stem of the output, also the name the site uses
    pub name: &'static str,
    pub prompt: &'static str,
    pub aspect_ratio: AspectRatio,
}

impl GenerationJob {
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(format!("{}.png", self.name))
    }
}

const fn job(name: &'static str, aspect_ratio: AspectRatio, prompt: &'static str) -> GenerationJob {
    GenerationJob {
        name,
        prompt,
        aspect_ratio,
    }
}

pub const BUILTIN_JOBS: &[GenerationJob] = &[
    job(
        "hero-bg",
        AspectRatio::Wide,
        "Abstract futuristic 3D landscape, liquid dark metal flowing, glowing bioluminescent cyan veins, obsidian glass textures, cinematic lighting, volumetric fog, octane render, 8k resolution, ultra-detailed, premium tech wallpaper, depth of field",
    ),
    job(
        "problem-speed",
        AspectRatio::Wide,
        "Abstract warp speed tunnel, long exposure light trails, digital acceleration, dark fiber optic cables, futuristic speed concept, cinematic lighting, cyan and deep blue accents, 8k resolution, photorealistic",
    ),
    job(
        "problem-workspace",
        AspectRatio::Wide,
        "Modern high-end developer workspace, sleek dark desk, multiple monitors displaying code and dashboards, mechanical keyboard, ambient cyan and blue bias lighting, professional office setup, cinematic 8k, photorealistic",
    ),
    job(
        "service-code",
        AspectRatio::Wide,
        "Close up of futuristic code hologram, glowing syntax highlighting, dark background, matrix style, depth of field, high tech software development concept",
    ),
    job(
        "service-cloud",
        AspectRatio::Wide,
        "Abstract 3D cloud computing visualization, interconnected glowing nodes, data flow, server infrastructure, cyan and blue lights, isometric view",
    ),
    job(
        "service-smartphone",
        AspectRatio::Wide,
        "Sleek futuristic smartphone device floating, glowing screen interface, mobile technology, dark premium glass texture, app development",
    ),
    job(
        "service-bot",
        AspectRatio::Wide,
        "Artificial intelligence concept, glowing neural network brain, digital synapse, futuristic robot, cyan data particles, machine learning",
    ),
    job(
        "service-trending",
        AspectRatio::Wide,
        "Digital strategy concept, glowing 3D graphs and charts, augmented reality business analytics, futuristic hud, financial growth",
    ),
    job(
        "service-pen",
        AspectRatio::Wide,
        "Abstract creative digital art, flowing colors and shapes, design tool concept, 3d pen tip glowing, artistic composition, vivid colors",
    ),
    job(
        "why-us-sculpture",
        AspectRatio::Portrait,
        "Abstract 3D crystal sculpture, translucent geometric shapes, internal glow, cyan and purple lighting, studio lighting, hyper realistic, 8k resolution, masterpiece, dark background",
    ),
    job(
        "portfolio-clockwork",
        AspectRatio::Wide,
        "High-end MacBook Pro mockup on dark sleek desk, displaying 'Clockwork Venue' dashboard software, dark UI with neon gold and purple accents, complex data tables and charts, nightlife atmosphere, blurred club lights in background, professional product photography, 8k, photorealistic",
    ),
    job(
        "portfolio-dogmora",
        AspectRatio::Wide,
        "Premium iPhone 15 mockup floating in air, displaying 'Dogmora' pet health app, clean white and teal user interface, photo of a happy Golden Retriever on screen, soft bright studio lighting, depth of field, high fidelity 3d render, advertising style",
    ),
    job(
        "process-bg",
        AspectRatio::Wide,
        "Digital blueprints, wireframes floating in 3D space, dark blue schematic look, technical drawing style, 8k, architecture",
    ),
    job(
        "about-team",
        AspectRatio::Square,
        "Team of futuristic developers collaborating, holographic interfaces, silhouettes, digital sparks, cinematic composition, blue and orange lighting, cyberpunk subtle aesthetic, 4k",
    ),
    job(
        "contact-bg",
        AspectRatio::Wide,
        "Abstract network connections, constellations, global digital network, dots and lines, dark background, cyan and deep blue, 8k, connecting the world",
    ),
];
