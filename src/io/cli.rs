//! Command-line interface: template rendering, batch map generation and
//! tileset inspection

use crate::algorithm::executor::{GeneratorConfig, HerringboneGenerator};
use crate::algorithm::weighting::Weighting;
use crate::codec::header::TemplateHeader;
use crate::codec::template::render_template;
use crate::codec::tileset::build_tileset_from_image;
use crate::io::configuration::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_SEED, DEFAULT_SHORT_SIDE_LEN, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_config, usage_error};
use crate::io::image::{load_rgb_image, save_rgb_image};
use crate::io::progress::ProgressManager;
use crate::spatial::config::{ColorModel, CornerMarkup, TileConfig};
use crate::spatial::layout::compute_template_size;
use crate::spatial::pixels::PixelsMut;
use clap::{Args, Parser, Subcommand};
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "herringbone")]
#[command(
    author,
    version,
    about = "Render Wang tile templates and generate herringbone maps"
)]
/// Command-line arguments for the herringbone tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a blank template image for artists to fill in
    Template(TemplateArgs),
    /// Generate maps from filled-in tileset images
    Generate(GenerateArgs),
    /// Print the configuration and tile counts of a tileset image
    Inspect(InspectArgs),
}

/// Arguments of the `template` command
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Output PNG path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Color corners instead of edges
    #[arg(short, long)]
    pub corner: bool,

    /// Module size in pixels; tiles are 2N x N and N x 2N
    #[arg(short, long, default_value_t = DEFAULT_SHORT_SIDE_LEN)]
    pub side: usize,

    /// Colors per slot: one value for every slot, or one per slot (6 edges, 4 corners)
    #[arg(long, value_delimiter = ',', default_values_t = [2])]
    pub colors: Vec<usize>,

    /// Variations along the template x axis
    #[arg(long, default_value_t = 1)]
    pub vary_x: usize,

    /// Variations along the template y axis
    #[arg(long, default_value_t = 1)]
    pub vary_y: usize,

    /// Mark corner samples of a corner type and color, as TYPE:COLOR (corner templates only)
    #[arg(long, value_parser = parse_markup)]
    pub markup: Vec<(usize, usize)>,
}

impl TemplateArgs {
    /// Tile configuration described by these arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the color list length fits neither one
    /// value nor one per slot, or markup is requested for an edge template.
    pub fn tile_config(&self) -> Result<TileConfig> {
        let model = if self.corner {
            ColorModel::Corner
        } else {
            ColorModel::Edge
        };
        let slots = model.slot_count();
        let mut num_color = [0; 6];
        match self.colors.as_slice() {
            [count] => {
                for slot in num_color.iter_mut().take(slots) {
                    *slot = *count;
                }
            }
            counts if counts.len() == slots => {
                for (slot, &count) in num_color.iter_mut().zip(counts) {
                    *slot = count;
                }
            }
            counts => {
                return Err(invalid_config(
                    "colors",
                    &format!("{counts:?}"),
                    &format!("expected 1 or {slots} values"),
                ));
            }
        }

        if !self.markup.is_empty() && !self.corner {
            return Err(invalid_config(
                "markup",
                &format!("{:?}", self.markup),
                &"corner markup needs --corner",
            ));
        }
        let mut corner_markup = CornerMarkup::new();
        for &(corner_type, color) in &self.markup {
            corner_markup.set(corner_type, color, true);
        }

        let config = TileConfig {
            model,
            short_side_len: self.side,
            num_color,
            num_vary_x: self.vary_x,
            num_vary_y: self.vary_y,
            corner_markup,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Arguments of the `generate` command
#[derive(Args, Debug)]
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateArgs {
    /// Tileset PNG file or directory of tileset PNGs
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Map width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_MAP_WIDTH)]
    pub width: u32,

    /// Map height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAP_HEIGHT)]
    pub height: u32,

    /// Random seed; the k-th file of a batch uses seed + k
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Relative color frequencies of one slot, as SLOT=W0,W1,...
    #[arg(long, value_parser = parse_slot_weights)]
    pub weight: Vec<(usize, Vec<u32>)>,

    /// Skip the corner repetition reduction pass
    #[arg(long)]
    pub no_repetition_reduction: bool,

    /// Largest map size in modules along either axis
    #[arg(long)]
    pub max_modules: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl GenerateArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator configuration described by these arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            max_modules: self
                .max_modules
                .map_or(defaults.max_modules, |max| (max, max)),
            reduce_repetition: !self.no_repetition_reduction,
        }
    }

    /// Weighting described by the `--weight` options, if any
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeighting` if a slot index is out of range.
    pub fn weighting(&self) -> Result<Option<Weighting>> {
        if self.weight.is_empty() {
            return Ok(None);
        }
        let mut weighting = Weighting::new();
        for (slot, weights) in &self.weight {
            weighting.set_slot(*slot, weights.clone())?;
        }
        Ok(Some(weighting))
    }
}

/// Arguments of the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Tileset PNG to inspect
    #[arg(value_name = "TILESET")]
    pub tileset: PathBuf,
}

/// Parse a `SLOT=W0,W1,...` weight option
///
/// # Errors
///
/// Returns a message if the separator is missing or a number is malformed.
pub fn parse_slot_weights(spec: &str) -> std::result::Result<(usize, Vec<u32>), String> {
    let (slot, weights) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=W0,W1,..., got '{spec}'"))?;
    let slot = slot
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad slot '{slot}': {e}"))?;
    let weights = weights
        .split(',')
        .map(|w| {
            w.trim()
                .parse::<u32>()
                .map_err(|e| format!("bad weight '{w}': {e}"))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((slot, weights))
}

/// Parse a `TYPE:COLOR` corner markup option
///
/// # Errors
///
/// Returns a message if the separator is missing or either value is not
/// in `0..4`.
pub fn parse_markup(spec: &str) -> std::result::Result<(usize, usize), String> {
    let (corner_type, color) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected TYPE:COLOR, got '{spec}'"))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&v| v < 4)
            .ok_or_else(|| format!("'{value}' is not in 0..4"))
    };
    Ok((parse(corner_type)?, parse(color)?))
}

/// Run the command selected on the command line
///
/// # Errors
///
/// Returns the first error raised by the selected command.
// Allow print for the inspection report itself
#[allow(clippy::print_stdout)]
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Template(args) => write_template(&args),
        Command::Generate(args) => FileProcessor::new(args).process(),
        Command::Inspect(args) => {
            print!("{}", describe_tileset(&args.tileset)?);
            Ok(())
        }
    }
}

/// Render and save the template described by `args`
///
/// # Errors
///
/// Returns `InvalidConfig` for a bad configuration and the image export
/// errors of [`save_rgb_image`].
pub fn write_template(args: &TemplateArgs) -> Result<()> {
    let config = args.tile_config()?;
    let image = render_template(&config)?;
    save_rgb_image(&image, &args.output)
}

/// Human-readable summary of a tileset image
///
/// # Errors
///
/// Returns the load and parse errors of the tileset image.
pub fn describe_tileset(path: &Path) -> Result<String> {
    let mut image = load_rgb_image(path)?;
    let header = TemplateHeader::decode(&PixelsMut::from_rgb_image(&mut image))?;
    let layout = compute_template_size(&header.to_config());
    let (width, height) = image.dimensions();
    let tileset = build_tileset_from_image(image)?;

    let slots = header.model.slot_count();
    let colors = header.num_color.get(..slots).unwrap_or(&header.num_color);
    Ok(format!(
        "{}\n  \
         model:        {:?}\n  \
         module size:  {}\n  \
         colors:       {colors:?}\n  \
         variations:   {}x{}\n  \
         image:        {width}x{height} (layout {}x{})\n  \
         tiles:        {} horizontal, {} vertical\n",
        path.display(),
        header.model,
        header.short_side_len,
        header.num_vary_x,
        header.num_vary_y,
        layout.width,
        layout.height,
        tileset.horizontal_tiles().len(),
        tileset.vertical_tiles().len()
    ))
}

/// Orchestrates batch map generation with progress tracking
pub struct FileProcessor {
    args: GenerateArgs,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor for the `generate` arguments
    pub fn new(args: GenerateArgs) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Self {
            args,
            progress_manager,
        }
    }

    /// Generate a map for every selected tileset
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, tileset parsing, generation or
    /// export fails for any file.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let weighting = self.args.weighting()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, weighting.as_ref())?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if is_png(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(usage_error("Target file must be a PNG image"))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_png(&path) && !is_generated_map(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(usage_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.args.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        weighting: Option<&Weighting>,
    ) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let tileset = build_tileset_from_image(load_rgb_image(input_path)?)?;
        let rng = StdRng::seed_from_u64(self.args.seed.wrapping_add(index as u64));
        let mut generator = HerringboneGenerator::new(self.args.generator_config(), rng);

        let mut image = RgbImage::new(self.args.width, self.args.height);
        let progress = &mut self.progress_manager;
        generator.generate_with_progress(
            &tileset,
            weighting,
            &mut PixelsMut::from_rgb_image(&mut image),
            |done, total| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_rows(index, done, total);
                }
            },
        )?;

        save_rgb_image(&image, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    /// Output path for a tileset: `<stem>_map.<ext>` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Maps written by earlier runs sit next to their tilesets
fn is_generated_map(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
