//! The production menu tables for the voice.
//!
//! Pure data: every submenu in both catalogs, the text tables their choice
//! descriptors render through, and the [`MENUS`] set the navigator walks.
//! Each submenu is padded with filler slots to a multiple of
//! [`PAGE_WIDTH`](super::PAGE_WIDTH) so paging always lands on a whole
//! window; [`MenuSet::validate()`](super::MenuSet::validate) enforces this
//! at startup.
//!
//! Short labels are 4 characters, sized to one display field. Text-table
//! entries are likewise 4 characters, right-padded by hand.

use super::descriptor::ParamDescriptor as P;
use super::descriptor::{MenuSet, Submenu, Target, ValueDisplay};

// ── Text tables ──────────────────────────────────────────────────────

const OFF_ON: &[&str] = &[" OFF", "  ON"];

const OSC_WAVES: &[&str] = &[
    "SAWU", "SAWD", " SQR", " TRI", " SIN", "NOIS", "SS3S", "SS7M", "SS7S",
];

const FILTER_TYPES: &[&str] = &[
    " BYP", "LP1P", "LP2P", "LP3P", "LP4P", "HP1P", "HP2P", "HP3P", "HP4P", "BP2P", "BP4P",
    "BP2P", "BR4P", "LLPS", "LBPS", "LHPS", "LLPP", "LBPP", "LHPP", "BBPP", "BHPP", "HHPP",
];

const FILTER_ROUTING: &[&str] = &[" STD", "  LR"];

const LFO_WAVES: &[&str] = &[
    " TRI", " SQR", "SAWU", "SAWD", " SIN", "Sx2x", "Sx3x", "Sx^3", "GUIT", " S&H",
];

const LFO_RANGE: &[&str] = &[" LOW", "HIGH"];

const LFO_SYNC: &[&str] = &["FREE", " KEY", "MFRE", "MKEY"];

const REVERB_MODES: &[&str] = &["PLAT", "HALL"];

// Shared by the chorus and phaser mode descriptors.
const SPREAD_MODES: &[&str] = &["MONO", "STER", "CROS"];

const DELAY_MODES: &[&str] = &["STER", "CROS", " LRC", " RLC", "MONO"];

const LEGATO_MODES: &[&str] = &["POLY", "MONO"];

const PORTA_MODES: &[&str] = &[" OFF", "  ON", "FING"];

const ARP_MODES: &[&str] = &[" OFF", "  UP", "DOWN", "UPDN", "PLAY", "RAND"];

const GAIN_STEPS: &[&str] = &[" 0dB", "+6dB", "12dB", "18dB"];

const DIST_TYPES: &[&str] = &["CLIP", "SOFT", "TUB1", "TUB2"];

const DIST_FILTERS: &[&str] = &[
    "48kc", "20kc", "18kc", "16kc", "14kc", "12kc", "10kc", " 8kc",
];

const INIT_CONFIRM: &[&str] = &["Clik"];

// ── Oscillators ──────────────────────────────────────────────────────

const OSC1: &[P] = &[
    P::choice("ENAB", "Osc. On/Off", OFF_ON, 1),
    P::choice("WAVE", "Waveform", OSC_WAVES, 11),
    P::numeric("DTUN", "Detune", 255, 23),
    P::numeric("TPOS", "Transpose", 255, 19),
    P::numeric("  PW", "Pulse Width", 255, 15),
    P::numeric("LEVL", "Level", 255, 27),
    P::numeric("LVLL", "Level Left", 255, 31),
    P::numeric("LVLR", "Level Right", 255, 32),
    P::numeric("SDET", "Sawstack Detune", 255, 285),
    P::filler(),
    P::filler(),
    P::filler(),
];

const OSC2: &[P] = &[
    P::choice("ENAB", "Osc. On/Off", OFF_ON, 2),
    P::choice("WAVE", "Waveform", OSC_WAVES, 12),
    P::numeric("DTUN", "Detune", 255, 24),
    P::numeric("TPOS", "Transpose", 255, 20),
    P::numeric("  PW", "Pulse Width", 255, 16),
    P::numeric("LEVL", "Level", 255, 28),
    P::numeric("LVLL", "Level Left", 255, 33),
    P::numeric("LVLR", "Level Right", 255, 34),
    P::numeric("SDET", "Sawstack Detune", 255, 286),
    P::filler(),
    P::filler(),
    P::filler(),
];

const OSC3: &[P] = &[
    P::choice("ENAB", "Osc. On/Off", OFF_ON, 3),
    P::choice("WAVE", "Waveform", OSC_WAVES, 13),
    P::numeric("DTUN", "Detune", 255, 25),
    P::numeric("TPOS", "Transpose", 255, 21),
    P::numeric("  PW", "Pulse Width", 255, 17),
    P::numeric("LEVL", "Level", 255, 29),
    P::numeric("LVLL", "Level Left", 255, 35),
    P::numeric("LVLR", "Level Right", 255, 36),
    P::numeric("SDET", "Sawstack Detune", 255, 287),
    P::choice("RING", "Ringmod 3-4", OFF_ON, 271),
    P::filler(),
    P::filler(),
];

const OSC4: &[P] = &[
    P::choice("ENAB", "Osc. On/Off", OFF_ON, 4),
    P::choice("WAVE", "Waveform", OSC_WAVES, 14),
    P::numeric("DTUN", "Detune", 255, 26),
    P::numeric("TPOS", "Transpose", 255, 22),
    P::numeric("  PW", "Pulse Width", 255, 18),
    P::numeric("LEVL", "Level", 255, 30),
    P::numeric("LVLL", "Level Left", 255, 37),
    P::numeric("LVLR", "Level Right", 255, 38),
    P::numeric("SDET", "Sawstack Detune", 255, 288),
    P::filler(),
    P::filler(),
    P::filler(),
];

// ── LFOs ─────────────────────────────────────────────────────────────

const LFO1: &[P] = &[
    P::choice("WAVE", "Waveform", LFO_WAVES, 160),
    P::choice("RANG", "Range", LFO_RANGE, 166),
    P::numeric(" SPD", "Speed", 255, 161),
    P::choice("SYNC", "Sync to Key, Multi", LFO_SYNC, 162),
    P::numeric("FADE", "Fade in Rate", 255, 163),
    P::numeric("PITC", "Pitch Depth", 255, 164),
    P::numeric(" AMP", "Amplitude Depth", 255, 165),
    P::note("--->", "More on the right ->"),
    P::numeric("PWHL", "Mod Wheel Pitch", 255, 181),
    P::numeric("PAFT", "Aftertouch Pitch", 255, 180),
    P::numeric("AWHL", "Mod Wheel Amp.", 255, 193),
    P::numeric("AAFT", "Aftertouch Amp.", 255, 192),
];

const LFO2: &[P] = &[
    P::choice("WAVE", "Waveform", LFO_WAVES, 170),
    P::choice("RANG", "Range", LFO_RANGE, 176),
    P::numeric(" SPD", "Speed", 255, 171),
    P::choice("SYNC", "Sync to Key, Multi", LFO_SYNC, 172),
    P::numeric("FADE", "Fade in Rate", 255, 173),
    P::numeric("  PW", "Pulse Width Depth", 255, 174),
    P::numeric(" CUT", "Filter Cut Depth", 255, 175),
    P::note("--->", "More on the right ->"),
    P::numeric("PWHL", "Mod Wheel Pulse W.", 255, 185),
    P::numeric("PAFT", "Aftertouch Pulse W.", 255, 184),
    P::numeric("CWHL", "Mod Wheel Filt. Cut", 255, 189),
    P::numeric("CAFT", "Aftertouch Filt. Cut", 255, 188),
];

// ── Filters ──────────────────────────────────────────────────────────

const FILTERS: &[P] = &[
    P::choice("TYPE", "Filter Type", FILTER_TYPES, 71),
    P::numeric("CUT1", "Filter 1 Cut", 255, 72),
    P::numeric("RES1", "Filter 1 Resonance", 255, 77),
    P::numeric("  EG", "Env. Gen. Level", 255, 75),
    P::numeric("CUT2", "Filter 2 Cut", 255, 78),
    P::numeric("RES2", "Filter 2 Resonance", 255, 79),
    P::numeric("VELO", "Velocity Level", 255, 73),
    P::numeric("DRIV", "Drive", 7, 275),
    P::numeric("KBTR", "Keyboard Tracking", 255, 74),
    P::numeric("EGVL", "Env. Gen. Velocity", 255, 76),
    P::numeric("VELR", "Velocity Resonance", 255, 276),
    P::numeric(" KBR", "Keyboard Resonance", 255, 277),
    P::choice("ROUT", "Filter Routing", FILTER_ROUTING, 278),
    P::filler(),
    P::filler(),
    P::filler(),
];

// ── Envelope generators ──────────────────────────────────────────────
// ADSR view only; the voice's full multi-stage envelopes stay at their
// defaults.

const AMP_ENV: &[P] = &[
    P::numeric("ARAT", "Attack Rate", 255, 117),
    P::numeric("DRAT", "Decay Rate", 255, 127),
    P::numeric("SUST", "Sustain Level", 255, 97),
    P::numeric("RRAT", "Release Rate", 255, 132),
];

const FILTER_ENV: &[P] = &[
    P::numeric("ARAT", "Attack Rate", 255, 116),
    P::numeric("DRAT", "Decay Rate", 255, 126),
    P::numeric("SUST", "Sustain Level", 255, 96),
    P::numeric("RRAT", "Release Rate", 255, 131),
];

const PITCH_ENV: &[P] = &[
    P::numeric("ARAT", "Attack Rate", 255, 115),
    P::numeric("DRAT", "Decay Rate", 255, 125),
    P::numeric("SUST", "Sustain Level", 255, 95),
    P::numeric("RRAT", "Release Rate", 255, 130),
];

// ── Effects ──────────────────────────────────────────────────────────

const REVERB: &[P] = &[
    P::numeric(" WET", "Reverb Level", 255, 391),
    P::choice("MODE", "Reverb Type", REVERB_MODES, 392),
    P::numeric("DCAY", "Decay Time", 255, 393),
    P::numeric("DAMP", "H.F. Damping", 255, 394),
    P::numeric(" HPF", "Tail L.F. Cut", 255, 397),
    P::numeric(" SPD", "Tail Mod Speed", 255, 395),
    P::numeric("DPTH", "Tail Mod Level", 255, 396),
    P::filler(),
];

const DELAY: &[P] = &[
    P::numeric(" WET", "Delay Level", 255, 301),
    P::choice("MODE", "Delay Type", DELAY_MODES, 302),
    P::numeric("TIME", "Delay Time", 255, 303),
    P::numeric("FDBK", "Feedback", 255, 304),
    P::numeric("  LP", "Lopass Response", 255, 305),
    P::numeric("  HP", "Hipass Response", 255, 306),
    P::numeric("TMPO", "Tempo", 255, 307),
    P::numeric(" MUL", "Tempo Multiplier", 255, 308),
    P::numeric(" DIV", "Tempo Divider", 255, 309),
    P::numeric(" SPD", "Mod Speed", 255, 298),
    P::numeric("DPTH", "Mod Depth", 255, 299),
    P::numeric("SMER", "Smear", 7, 291),
    P::choice("  2x", "2X Mode", OFF_ON, 292),
    P::filler(),
    P::filler(),
    P::filler(),
];

const CHORUS: &[P] = &[
    P::numeric(" WET", "Chorus Level", 255, 361),
    P::choice("MODE", "Chorus Type", SPREAD_MODES, 362),
    P::numeric(" SPD", "Speed", 255, 363),
    P::numeric("DPTH", "Depth", 255, 364),
    P::numeric("FDBK", "Feedback", 255, 365),
    P::numeric("LRPH", "L-R Phase", 255, 366),
    P::filler(),
    P::filler(),
];

const PHASER: &[P] = &[
    P::numeric(" WET", "Phaser Level", 255, 311),
    P::choice("MODE", "Phaser Type", SPREAD_MODES, 312),
    P::numeric(" SPD", "Speed", 255, 314),
    P::numeric("DPTH", "Depth", 255, 313),
    P::numeric("FDBK", "Feedback", 255, 315),
    P::numeric("OFFS", "Offset", 255, 316),
    P::numeric("STAG", "Stages", 12, 317),
    P::numeric("LRPH", "L-R Phase", 255, 318),
];

// ── Patch memory ─────────────────────────────────────────────────────
// These three submenus bind the panel-local command targets; the slot
// values never travel the ordinary parameter path.

const SAVE_PATCH: &[P] = &[
    P::slot("Slot", "Double Click to Save", 127, Target::SaveSlot),
    P::note("    ", "Save to Memory"),
    P::filler(),
    P::filler(),
];

const LOAD_PATCH: &[P] = &[
    P::slot("Slot", "Load from Memory", 127, Target::LoadSlot),
    P::filler(),
    P::filler(),
    P::filler(),
];

const INIT_PATCH: &[P] = &[
    P {
        short: "Dubl",
        long: "Double Click to Init",
        range: 0,
        display: ValueDisplay::Text(INIT_CONFIRM),
        target: Target::InitPatch,
    },
    P::filler(),
    P::filler(),
    P::filler(),
];

// ── Extra catalog: performance and system pages ──────────────────────

const PERFORMANCE: &[P] = &[
    P::numeric(" CUT", "Filter Cutoff", 255, 72),
    P::numeric("DPTH", "Filter E.G. Depth", 255, 75),
    P::numeric("RES0", "Filter Resonance", 255, 77),
    P::choice("TYPE", "Filter Type", FILTER_TYPES, 71),
    P::numeric("SPD1", "LFO1 Speed", 255, 161),
    P::numeric("PITC", "LFO1 Pitch Depth", 255, 164),
    P::numeric("SPD2", "LFO2 Speed", 255, 171),
    P::numeric(" CUT", "LFO2 Filt. Cut", 255, 175),
    P::numeric("CHOR", "Chorus Level", 255, 361),
    P::numeric("RVRB", "Reverb Level", 255, 391),
    P::numeric("DLAY", "Delay Level", 255, 301),
    P::numeric("PHAS", "Phaser Level", 255, 311),
    P::numeric("  AM", "Amp Mod Level", 255, 330),
    P::choice(" SEQ", "Sequencer On/Off", OFF_ON, 428),
    P::filler(),
    P::filler(),
];

const GLOBAL: &[P] = &[
    P::numeric("TPOS", "Transpose", 255, 241),
    P::numeric("BNDU", "Bend Up Range", 10, 242),
    P::numeric("BNDD", "Bend Down Range", 10, 243),
    P::choice("LEGA", "Legato Mode", LEGATO_MODES, 244),
    P::choice("PMOD", "Portamento Mode", PORTA_MODES, 245),
    P::numeric("PTIM", "Portamento Time", 255, 246),
    P::numeric(" VOL", "Volume", 255, 248),
    P::numeric(" PAN", "Pan", 255, 247),
    P::numeric("VOFF", "Velocity Offset", 127, 249),
    P::numeric("TUNE", "Tuning", 255, 251),
    P::filler(),
    P::filler(),
];

const AMP_MOD: &[P] = &[
    P::numeric(" WET", "Amp. Mod. Level", 255, 330),
    P::numeric(" SPD", "Speed", 255, 331),
    P::numeric("RANG", "Speed Range", 255, 332),
    P::numeric("LRPH", "L-R Phase", 255, 333),
];

const ARPEGGIATOR: &[P] = &[
    P::choice("MODE", "Arp Mode", ARP_MODES, 450),
    P::numeric("TMPO", "Tempo (min 44)", 255, 451),
    P::numeric(" MUL", "Tempo Multiplier", 10, 453),
    P::numeric(" OCT", "Octaves", 10, 454),
];

const SEQUENCER: &[P] = &[
    P::choice("ENAB", "On/Off", OFF_ON, 428),
    P::numeric("VELO", "Velocity", 127, 429),
    P::numeric("STPS", "Seq. Length", 16, 430),
    P::numeric("TMPO", "Tempo", 255, 431),
    P::numeric(" MUL", "Tempo Multiplier", 10, 432),
    P::numeric("TPOS", "Transpose", 255, 433),
    // Two markers so the step grid starts on its own window.
    P::note("STPS", "-->Steps"),
    P::note("--->", "-->Steps"),
    P::numeric("   1", "Step 1", 255, 434),
    P::numeric("   2", "Step 2", 255, 435),
    P::numeric("   3", "Step 3", 255, 436),
    P::numeric("   4", "Step 4", 255, 437),
    P::numeric("   5", "Step 5", 255, 438),
    P::numeric("   6", "Step 6", 255, 439),
    P::numeric("   7", "Step 7", 255, 440),
    P::numeric("   8", "Step 8", 255, 441),
    P::numeric("   9", "Step 9", 255, 442),
    P::numeric("  10", "Step 10", 255, 443),
    P::numeric("  11", "Step 11", 255, 444),
    P::numeric("  12", "Step 12", 255, 445),
    P::numeric("  13", "Step 13", 255, 446),
    P::numeric("  14", "Step 14", 255, 447),
    P::numeric("  15", "Step 15", 255, 448),
    P::numeric("  16", "Step 16", 255, 449),
];

const GATE: &[P] = &[
    P::choice("ENAB", "Gate Enable", OFF_ON, 385),
    P::numeric("CURV", "Curve Shape", 1, 386),
    P::numeric("ATTK", "Attack", 255, 387),
    P::numeric("RELS", "Release", 255, 388),
];

const EXTRA_FX: &[P] = &[
    P::choice(" PRE", "Pre FX Gain", GAIN_STEPS, 510),
    P::choice("POST", "Post FX Gain", GAIN_STEPS, 511),
    P::numeric(" LPF", "Lowpass Filter", 255, 320),
    P::numeric(" HPF", "Highpass Filter", 255, 321),
    P::choice("DIST", "Distortion On/Off", OFF_ON, 350),
    P::choice("DTYP", "Distortion Type", DIST_TYPES, 354),
    P::numeric(" PRE", "Pre Dist. Gain", 255, 351),
    P::numeric("POST", "Post Dist. Gain", 255, 352),
    P::choice("FILT", "Post Dist. Filter", DIST_FILTERS, 353),
    P::numeric("CRSH", "Bitcrusher Depth", 24, 380),
    P::numeric("DECI", "Decimator Depth", 23, 370),
    P::filler(),
];

const MIDI_CONTROL: &[P] = &[
    P::numeric("PAFT", "Pitch Aftertouch", 255, 200),
    P::numeric("PRND", "Pitch Random", 255, 203),
    P::numeric("PWWH", "Pulse Width Wheel", 255, 205),
    P::numeric("PWAF", "Pulse Width Aftert.", 255, 204),
    P::numeric("CTWH", "Cutoff Wheel", 255, 209),
    P::numeric("CTAF", "Cutoff Aftertouch", 255, 208),
    P::numeric("VOWH", "Volume Wheel", 255, 213),
    P::numeric("VOAF", "Volume Aftertouch", 255, 212),
    P::numeric("CL1L", "Control 1 HI", 255, 400),
    P::numeric("CL1H", "Control 1 LO", 255, 401),
    P::numeric("CL2L", "Control 2 HI", 255, 402),
    P::numeric("CL2H", "Control 2 LO", 255, 403),
    P::numeric("CL3L", "Control 3 HI", 255, 404),
    P::numeric("CL3H", "Control 3 LO", 255, 405),
    P::numeric("CL4L", "Control 4 HI", 255, 406),
    P::numeric("CL4H", "Control 4 LO", 255, 407),
];

// ── Catalogs ─────────────────────────────────────────────────────────

static MAIN_CATALOG: &[Submenu] = &[
    Submenu { name: "Oscillator 1", entries: OSC1 },
    Submenu { name: "Oscillator 2", entries: OSC2 },
    Submenu { name: "Oscillator 3", entries: OSC3 },
    Submenu { name: "Oscillator 4", entries: OSC4 },
    Submenu { name: "LFO 1", entries: LFO1 },
    Submenu { name: "LFO 2", entries: LFO2 },
    Submenu { name: "Filters", entries: FILTERS },
    Submenu { name: "Amplitude Envelope", entries: AMP_ENV },
    Submenu { name: "Filter Envelope", entries: FILTER_ENV },
    Submenu { name: "Reverb", entries: REVERB },
    Submenu { name: "Delay", entries: DELAY },
    Submenu { name: "Chorus/Flanger", entries: CHORUS },
    Submenu { name: "Phaser", entries: PHASER },
    Submenu { name: "Init Patch (2xClick)", entries: INIT_PATCH },
    Submenu { name: "Save Patch (2xClick)", entries: SAVE_PATCH },
    Submenu { name: "Load Patch", entries: LOAD_PATCH },
];

static EXTRA_CATALOG: &[Submenu] = &[
    Submenu { name: "* Performance", entries: PERFORMANCE },
    Submenu { name: "* Global Params", entries: GLOBAL },
    Submenu { name: "* Amplitude Mod", entries: AMP_MOD },
    Submenu { name: "* Arpeggiator", entries: ARPEGGIATOR },
    Submenu { name: "* Sequencer", entries: SEQUENCER },
    Submenu { name: "* Gate", entries: GATE },
    Submenu { name: "* Pitch Envelope", entries: PITCH_ENV },
    Submenu { name: "* Additional Effects", entries: EXTRA_FX },
    Submenu { name: "* MIDI", entries: MIDI_CONTROL },
];

/// The complete production menu configuration.
pub static MENUS: MenuSet = MenuSet {
    main: MAIN_CATALOG,
    extra: EXTRA_CATALOG,
};

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::{CatalogId, ENGINE_PARAM_COUNT, PAGE_WIDTH};
    use super::*;

    fn all_submenus() -> impl Iterator<Item = &'static Submenu> {
        MENUS.main.iter().chain(MENUS.extra.iter())
    }

    #[test]
    fn production_tables_validate() {
        assert_eq!(MENUS.validate(), Ok(()));
    }

    #[test]
    fn every_submenu_is_page_aligned() {
        for sub in all_submenus() {
            assert!(!sub.entries.is_empty(), "{} is empty", sub.name);
            assert_eq!(
                sub.entries.len() % PAGE_WIDTH,
                0,
                "{} has {} entries",
                sub.name,
                sub.entries.len()
            );
        }
    }

    #[test]
    fn text_tables_match_ranges() {
        for sub in all_submenus() {
            for d in sub.entries {
                if let ValueDisplay::Text(table) = d.display {
                    assert_eq!(
                        table.len(),
                        d.range as usize + 1,
                        "{} / {}",
                        sub.name,
                        d.short
                    );
                }
            }
        }
    }

    #[test]
    fn param_ids_are_real_engine_parameters() {
        for sub in all_submenus() {
            for d in sub.entries {
                if let Target::Param(id) = d.target {
                    assert!(id < ENGINE_PARAM_COUNT, "{} / {}: {}", sub.name, d.short, id);
                }
            }
        }
    }

    #[test]
    fn labels_fit_one_field() {
        for sub in all_submenus() {
            for d in sub.entries {
                assert!(d.short.len() <= 4, "{} / {:?}", sub.name, d.short);
                if let ValueDisplay::Text(table) = d.display {
                    for entry in table {
                        assert!(entry.len() <= 4, "{} / {}: {:?}", sub.name, d.short, entry);
                    }
                }
            }
        }
    }

    #[test]
    fn catalog_shapes() {
        assert_eq!(MENUS.main.len(), 16);
        assert_eq!(MENUS.extra.len(), 9);
        assert_eq!(MENUS.catalog(CatalogId::Main)[0].name, "Oscillator 1");
        assert_eq!(MENUS.catalog(CatalogId::Main)[15].name, "Load Patch");
        assert_eq!(MENUS.catalog(CatalogId::Extra)[0].name, "* Performance");
    }

    #[test]
    fn oscillator_one_pads_nine_entries_to_three_pages() {
        let osc1 = &MENUS.main[0];
        assert_eq!(osc1.entries.len(), 12);
        assert_eq!(osc1.page_count(), 3);
        assert!(osc1.entries[..9].iter().all(|d| d.is_editable()));
        assert!(osc1.entries[9..].iter().all(|d| !d.is_editable()));
    }

    #[test]
    fn each_command_target_is_bound_exactly_once() {
        let mut loads = 0;
        let mut saves = 0;
        let mut inits = 0;
        for sub in all_submenus() {
            for d in sub.entries {
                match d.target {
                    Target::LoadSlot => loads += 1,
                    Target::SaveSlot => saves += 1,
                    Target::InitPatch => inits += 1,
                    Target::Param(_) | Target::Filler => {}
                }
            }
        }
        assert_eq!((loads, saves, inits), (1, 1, 1));
    }
}
