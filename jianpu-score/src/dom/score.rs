//! The whole document: staves laid out measure by measure.
//!
//! Staves are stored flat. With `n` instruments, stave `i` belongs to
//! measure `i / n` and instrument `i % n`, so every measure is a
//! contiguous block of `n` staves and the stave count is always a
//! multiple of `n`.

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use super::{
    navigation::{NotePath, NoteRef, StaveRef},
    voice::Deletion,
    NodeId, Note, Stave, Voice,
};
use crate::{
    error::{ScoreError, ScoreResult},
    primitives::{Duration, EditMode, TimeSignature},
};

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, PartialEq)]
#[serde(try_from = "ScoreRepr")]
pub struct Score {
    #[serde(skip_serializing)]
    #[derivative(PartialEq = "ignore")]
    id: NodeId,
    pub title: String,
    pub author: String,
    staves: Vec<Stave>,
    instruments: Vec<String>,
    default_time_signature: TimeSignature,
}

impl Default for Score {
    /// Two-handed guzheng score in 4/4 with one empty measure.
    fn default() -> Self {
        Self::build(
            vec!["guzheng left".to_string(), "guzheng right".to_string()],
            TimeSignature::default(),
        )
    }
}

impl Score {
    /// Score with one resting measure.
    pub fn new(
        instruments: Vec<String>,
        default_time_signature: TimeSignature,
    ) -> ScoreResult<Self> {
        check_header(&instruments, &default_time_signature)?;
        Ok(Self::build(instruments, default_time_signature))
    }

    /// Score of ready-made staves, in measure-major order.
    ///
    /// Every stave is stamped with the default measure duration.
    pub fn with_staves(
        instruments: Vec<String>,
        default_time_signature: TimeSignature,
        staves: Vec<Stave>,
    ) -> ScoreResult<Self> {
        check_header(&instruments, &default_time_signature)?;
        check_layout(staves.len(), instruments.len())?;
        let mut score = Self::empty(instruments, default_time_signature);
        for stave in staves {
            score.append_stave(stave);
        }
        Ok(score)
    }

    fn build(
        instruments: Vec<String>,
        default_time_signature: TimeSignature,
    ) -> Self {
        let mut score = Self::empty(instruments, default_time_signature);
        score.add_measure();
        score
    }

    fn empty(
        instruments: Vec<String>,
        default_time_signature: TimeSignature,
    ) -> Self {
        Self {
            id: NodeId::next(),
            title: "Untitled".to_string(),
            author: "Author".to_string(),
            staves: Vec::new(),
            instruments,
            default_time_signature,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn instruments(&self) -> &[String] {
        &self.instruments
    }
    pub fn num_instruments(&self) -> usize {
        self.instruments.len()
    }
    pub fn default_time_signature(&self) -> TimeSignature {
        self.default_time_signature
    }
    pub fn default_measure_duration(&self) -> Duration {
        self.default_time_signature.measure_duration()
    }

    pub fn staves(&self) -> &[Stave] {
        &self.staves
    }
    pub fn stave(&self, index: usize) -> Option<&Stave> {
        self.staves.get(index)
    }
    pub fn stave_mut(&mut self, index: usize) -> Option<&mut Stave> {
        self.staves.get_mut(index)
    }
    pub fn stave_index(&self, stave: NodeId) -> Option<usize> {
        self.staves.iter().position(|s| s.id() == stave)
    }

    pub fn measure_count(&self) -> usize {
        self.staves.len() / self.num_instruments()
    }
    pub fn measure_of(&self, stave: usize) -> usize {
        stave / self.num_instruments()
    }
    pub fn instrument_of(&self, stave: usize) -> usize {
        stave % self.num_instruments()
    }
    /// Staves of one measure, one per instrument.
    pub fn measure(&self, measure: usize) -> Option<&[Stave]> {
        let n = self.num_instruments();
        self.staves.get(measure * n..(measure + 1) * n)
    }

    /// Append a measure of rests. Returns its index.
    pub fn add_measure(&mut self) -> usize {
        let duration = self.default_measure_duration();
        for _ in 0..self.num_instruments() {
            self.append_stave(Stave::rest(duration));
        }
        log::debug!("added measure {}", self.measure_count() - 1);
        self.measure_count() - 1
    }

    /// Append one stave per instrument as a new measure.
    pub fn push_measure(&mut self, staves: Vec<Stave>) -> ScoreResult<usize> {
        if staves.len() != self.num_instruments() {
            return Err(ScoreError::MeasureSize {
                expected: self.num_instruments(),
                found: staves.len(),
            });
        }
        for stave in staves {
            self.append_stave(stave);
        }
        Ok(self.measure_count() - 1)
    }

    fn append_stave(&mut self, mut stave: Stave) {
        stave.set_score(Some(self.id));
        // a measure is at least one quarter long
        if let Err(error) =
            stave.set_total_duration(self.default_measure_duration())
        {
            log::warn!("{}", error);
        }
        self.staves.push(stave);
    }

    /// Same instrument, previous measure; the first measure wraps to the
    /// last.
    pub fn left_stave(&self, stave: usize) -> usize {
        let n = self.num_instruments();
        match self.measure_of(stave) {
            0 => self.staves.len() - n + self.instrument_of(stave),
            _ => stave - n,
        }
    }
    /// Same instrument, next measure; the last measure wraps to the first.
    pub fn right_stave(&self, stave: usize) -> usize {
        let n = self.num_instruments();
        match self.measure_of(stave) + 1 == self.measure_count() {
            true => self.instrument_of(stave),
            false => stave + n,
        }
    }
    /// Previous stave in the flat list, staying on the first one.
    pub fn up_stave(&self, stave: usize) -> usize {
        stave.saturating_sub(1)
    }
    /// Next stave in the flat list, staying on the last one.
    pub fn down_stave(&self, stave: usize) -> usize {
        (stave + 1).min(self.staves.len() - 1)
    }

    pub fn stave_ref(&self, stave: usize) -> Option<StaveRef<'_>> {
        match stave < self.staves.len() {
            true => Some(StaveRef::new(self, stave)),
            false => None,
        }
    }

    /// Bottom note of the first group of the first voice of the first
    /// stave.
    pub fn first_note(&self) -> NoteRef<'_> {
        StaveRef::new(self, 0)
            .first_voice()
            .first_group()
            .bottom_note()
    }

    pub fn locate(&self, note: NodeId) -> Option<NotePath> {
        self.staves.iter().enumerate().find_map(|(s, stave)| {
            stave.voices().iter().enumerate().find_map(|(v, voice)| {
                voice.groups().iter().enumerate().find_map(|(g, group)| {
                    group.note_index(note).map(|n| {
                        debug_assert_eq!(
                            group.notes()[n].group_id(),
                            Some(group.id())
                        );
                        NotePath::new(s, v, g, n)
                    })
                })
            })
        })
    }
    pub fn note(&self, note: NodeId) -> Option<NoteRef<'_>> {
        self.locate(note).and_then(|path| self.note_at(path))
    }
    pub fn note_at(&self, path: NotePath) -> Option<NoteRef<'_>> {
        let voice = self.stave(path.stave)?.voice(path.voice)?;
        voice.group(path.group)?.notes().get(path.note)?;
        Some(
            self.stave_ref(path.stave)?
                .voice(path.voice)
                .group(path.group)
                .note(path.note),
        )
    }
    pub fn note_mut(&mut self, note: NodeId) -> Option<&mut Note> {
        self.staves
            .iter_mut()
            .flat_map(|stave| stave.voices_mut().iter_mut())
            .find_map(|voice| voice.note_mut(note))
    }
    pub fn voice_of_note_mut(&mut self, note: NodeId) -> Option<&mut Voice> {
        let path = self.locate(note)?;
        self.staves.get_mut(path.stave)?.voice_mut(path.voice)
    }

    /// Delete `at` and return the note the cursor should move to.
    ///
    /// Removing a rest placeholder drops its group; the cursor then goes
    /// to the neighbouring group on the side `mode` prefers, even across
    /// a barline.
    pub fn delete_note(
        &mut self,
        at: NodeId,
        mode: EditMode,
    ) -> Option<NodeId> {
        let path = self.locate(at)?;
        let successor = {
            let group = self.note_at(path)?.group();
            let neighbour = match mode.deletes_forward() {
                true => group.right_group(),
                false => group.left_group(),
            };
            neighbour.bottom_note().id()
        };
        let voice = self.staves.get_mut(path.stave)?.voice_mut(path.voice)?;
        match voice.delete_note(at) {
            Deletion::Note(cursor) => Some(cursor),
            Deletion::Group(_) => Some(successor),
            Deletion::Nothing => Some(at),
        }
    }

    fn link(&mut self) {
        let id = self.id;
        for stave in self.staves.iter_mut() {
            stave.set_score(Some(id));
        }
    }
}

fn check_header(
    instruments: &[String],
    time_signature: &TimeSignature,
) -> ScoreResult<()> {
    if instruments.is_empty() {
        return Err(ScoreError::NoInstruments);
    }
    if !time_signature.is_valid() {
        return Err(ScoreError::InvalidTimeSignature(
            time_signature.numerator,
            time_signature.denominator,
        ));
    }
    Ok(())
}

fn check_layout(staves: usize, instruments: usize) -> ScoreResult<()> {
    if staves == 0 {
        return Err(ScoreError::NoStaves);
    }
    if staves % instruments != 0 {
        return Err(ScoreError::UnalignedStaves {
            staves,
            instruments,
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct ScoreRepr {
    title: String,
    author: String,
    staves: Vec<Stave>,
    instruments: Vec<String>,
    default_time_signature: TimeSignature,
}
/// Stored stave durations are kept as written.
impl TryFrom<ScoreRepr> for Score {
    type Error = ScoreError;

    fn try_from(repr: ScoreRepr) -> Result<Self, Self::Error> {
        check_header(&repr.instruments, &repr.default_time_signature)?;
        check_layout(repr.staves.len(), repr.instruments.len())?;
        let mut score = Self {
            id: NodeId::next(),
            title: repr.title,
            author: repr.author,
            staves: repr.staves,
            instruments: repr.instruments,
            default_time_signature: repr.default_time_signature,
        };
        score.link();
        Ok(score)
    }
}
