use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, FillRule, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper::utils::range_test;
use crate::clipper_config::ClipperConfig;
use crate::constants::MAX_PRECISION;
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::{Path64, PathD, Paths64, PathsD};
use crate::geometry::polygon::{scale_paths_to_64, scale_paths_to_d};

/// Collects subject, open subject and clip paths and runs Boolean operations
/// over them. Every `execute` builds a fresh engine, so the wrapper can be
/// executed repeatedly with different clip types.
pub struct ClipperWrapper {
    configuration: ClipperConfig,
    subjects: Paths64,
    open_subjects: Paths64,
    clips: Paths64,
}

impl ClipperWrapper {
    pub fn new(configuration: ClipperConfig) -> Self {
        Self {
            configuration,
            subjects: Vec::new(),
            open_subjects: Vec::new(),
            clips: Vec::new(),
        }
    }

    pub fn from_packed(packed_config: u32) -> Self {
        Self::new(ClipperConfig::from_packed(packed_config))
    }

    pub fn configuration(&self) -> &ClipperConfig {
        &self.configuration
    }

    fn queue(target: &mut Paths64, paths: &[Path64]) -> ClipperResult<()> {
        for path in paths {
            if let Some(err) = path.iter().find_map(|pt| range_test(pt).err()) {
                log::warn!("clipper wrapper: rejected path of {} points: {}", path.len(), err);
                return Err(err);
            }

            target.push(path.clone());
        }

        Ok(())
    }

    pub fn add_subject(&mut self, paths: &[Path64]) -> ClipperResult<()> {
        Self::queue(&mut self.subjects, paths)
    }

    pub fn add_open_subject(&mut self, paths: &[Path64]) -> ClipperResult<()> {
        Self::queue(&mut self.open_subjects, paths)
    }

    pub fn add_clip(&mut self, paths: &[Path64]) -> ClipperResult<()> {
        Self::queue(&mut self.clips, paths)
    }

    pub fn clear(&mut self) {
        self.subjects.clear();
        self.open_subjects.clear();
        self.clips.clear();
    }

    /// Runs the operation and returns the closed result as a tree plus the
    /// clipped open subjects.
    pub fn execute(
        &self,
        clip_type: ClipType,
        fill_rule: FillRule,
    ) -> ClipperResult<(PolyTree, Paths64)> {
        let mut clipper = Clipper::new(self.configuration);

        clipper.add_paths(&self.subjects, PolyType::Subject, true)?;
        clipper.add_paths(&self.open_subjects, PolyType::Subject, false)?;
        clipper.add_paths(&self.clips, PolyType::Clip, true)?;

        clipper.execute(clip_type, fill_rule)
    }

    /// Same as `execute` with the tree flattened, holes included.
    pub fn execute_paths(
        &self,
        clip_type: ClipType,
        fill_rule: FillRule,
    ) -> ClipperResult<(Paths64, Paths64)> {
        let (tree, open_paths) = self.execute(clip_type, fill_rule)?;

        Ok((tree.to_paths(), open_paths))
    }
}

impl Default for ClipperWrapper {
    fn default() -> Self {
        Self::new(ClipperConfig::default())
    }
}

/// Float front end: coordinates are scaled by `10^precision` and rounded
/// before they reach the integer engine.
pub struct ClipperWrapperD {
    inner: ClipperWrapper,
    scale: f64,
}

impl ClipperWrapperD {
    pub fn new(configuration: ClipperConfig) -> ClipperResult<Self> {
        let precision = configuration.precision;

        if !(-MAX_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(ClipperError::PrecisionOutOfRange { precision });
        }

        Ok(Self {
            inner: ClipperWrapper::new(configuration),
            scale: 10f64.powi(precision as i32),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn add_subject(&mut self, paths: &[PathD]) -> ClipperResult<()> {
        let scaled = scale_paths_to_64(paths, self.scale)?;
        self.inner.add_subject(&scaled)
    }

    pub fn add_open_subject(&mut self, paths: &[PathD]) -> ClipperResult<()> {
        let scaled = scale_paths_to_64(paths, self.scale)?;
        self.inner.add_open_subject(&scaled)
    }

    pub fn add_clip(&mut self, paths: &[PathD]) -> ClipperResult<()> {
        let scaled = scale_paths_to_64(paths, self.scale)?;
        self.inner.add_clip(&scaled)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// The tree stays in scaled integer coordinates; use
    /// `PolyTree::to_paths_d(self.scale())` to read it back as floats.
    pub fn execute(
        &self,
        clip_type: ClipType,
        fill_rule: FillRule,
    ) -> ClipperResult<(PolyTree, PathsD)> {
        let (tree, open_paths) = self.inner.execute(clip_type, fill_rule)?;

        Ok((tree, scale_paths_to_d(&open_paths, self.scale)))
    }

    pub fn execute_paths(
        &self,
        clip_type: ClipType,
        fill_rule: FillRule,
    ) -> ClipperResult<(PathsD, PathsD)> {
        let (tree, open_paths) = self.execute(clip_type, fill_rule)?;

        Ok((tree.to_paths_d(self.scale), open_paths))
    }
}

pub fn boolean_op(
    clip_type: ClipType,
    fill_rule: FillRule,
    subjects: &[Path64],
    clips: &[Path64],
) -> ClipperResult<Paths64> {
    let mut wrapper = ClipperWrapper::default();

    wrapper.add_subject(subjects)?;
    wrapper.add_clip(clips)?;

    let (paths, _) = wrapper.execute_paths(clip_type, fill_rule)?;

    Ok(paths)
}

pub fn intersect(
    subjects: &[Path64],
    clips: &[Path64],
    fill_rule: FillRule,
) -> ClipperResult<Paths64> {
    boolean_op(ClipType::Intersection, fill_rule, subjects, clips)
}

pub fn union(
    subjects: &[Path64],
    clips: &[Path64],
    fill_rule: FillRule,
) -> ClipperResult<Paths64> {
    boolean_op(ClipType::Union, fill_rule, subjects, clips)
}

pub fn difference(
    subjects: &[Path64],
    clips: &[Path64],
    fill_rule: FillRule,
) -> ClipperResult<Paths64> {
    boolean_op(ClipType::Difference, fill_rule, subjects, clips)
}

pub fn xor(subjects: &[Path64], clips: &[Path64], fill_rule: FillRule) -> ClipperResult<Paths64> {
    boolean_op(ClipType::Xor, fill_rule, subjects, clips)
}
