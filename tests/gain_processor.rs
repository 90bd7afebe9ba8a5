#![cfg(feature = "rtrb")]

use approx::assert_abs_diff_eq;
use gain_automator::{
    automation::{
        block::{advance_block, ramp_block},
        message::AutomationMessage,
    },
    Breakpoint, Breakpoints, GainProcessor, NoPoints, ParamId, ParameterChanges, ProcessorConfig,
    GAIN_PARAM_ID,
};
use rtrb::RingBuffer;

const EPS: f32 = 1e-6;

#[test]
fn lane_split_across_blocks_lands_on_same_value() {
    // One 12-frame lane, rendered whole and as three 4-frame host blocks
    // that each carry the points falling inside them.
    let whole = [
        Breakpoint::new(0, 0.0),
        Breakpoint::new(4, 0.5),
        Breakpoint::new(8, 1.0),
    ];
    let single = advance_block(Breakpoints::new(&whole), 0.0, 12);

    let blocks: [&[Breakpoint]; 3] = [
        &[Breakpoint::new(0, 0.0), Breakpoint::new(4, 0.5)],
        &[Breakpoint::new(0, 0.5), Breakpoint::new(4, 1.0)],
        &[],
    ];
    let mut seed = 0.0;
    let mut out = [0.0; 4];
    for points in blocks {
        seed = ramp_block(Breakpoints::new(points), seed, &mut out);
    }

    assert_abs_diff_eq!(seed, single, epsilon = EPS);
    assert_eq!(seed, 1.0);
}

#[test]
fn no_changes_passes_audio_at_held_gain() {
    let mut effect = GainProcessor::new(ProcessorConfig::default().initial_gain(0.5)).unwrap();

    let mut left = [0.2, -0.4, 0.6, -0.8];
    let mut right = [1.0, 1.0, 1.0, 1.0];
    let changes = ParameterChanges::with_capacity(1, 1);
    effect.process_with_changes(&mut [&mut left[..], &mut right[..]], 4, &changes);

    assert_eq!(left, [0.1, -0.2, 0.3, -0.4]);
    assert_eq!(right, [0.5; 4]);
    assert_eq!(effect.gain(), 0.5);
}

#[test]
fn gain_threads_between_blocks() {
    let mut effect = GainProcessor::new(ProcessorConfig::default()).unwrap();
    let mut changes = ParameterChanges::with_capacity(2, 8);

    // Block 1: fade 1.0 -> 0.0 over the first 4 frames.
    changes.add_point(GAIN_PARAM_ID, 0, 1.0).unwrap();
    changes.add_point(GAIN_PARAM_ID, 4, 0.0).unwrap();
    let mut block = [1.0; 8];
    effect.process_with_changes(&mut [&mut block[..]], 8, &changes);
    assert_eq!(block, [1.0, 0.75, 0.5, 0.25, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(effect.gain(), 0.0);

    // Block 2: no points for gain, only for another parameter.
    changes.clear();
    changes.add_point(ParamId(3), 0, 1.0).unwrap();
    let mut block = [1.0; 8];
    effect.process_with_changes(&mut [&mut block[..]], 8, &changes);
    assert_eq!(block, [0.0; 8]);
}

#[test]
fn block_without_channels_still_advances_automation() {
    let mut effect = GainProcessor::new(ProcessorConfig::default().initial_gain(0.5)).unwrap();
    let mut changes = ParameterChanges::with_capacity(1, 4);
    changes.add_point(GAIN_PARAM_ID, 0, 0.0).unwrap();
    changes.add_point(GAIN_PARAM_ID, 4, 1.0).unwrap();

    let expected = advance_block(changes.source(GAIN_PARAM_ID), 0.5, 8);
    effect.process_with_changes(&mut [], 8, &changes);

    assert_eq!(expected, 1.0);
    assert_eq!(effect.gain(), expected);

    // The next block starts from where the silent one ended.
    let mut block = [1.0; 2];
    effect.process(&mut [&mut block[..]], 2);
    assert_eq!(block, [1.0; 2]);
}

#[test]
fn editor_edit_becomes_block_start_point() {
    let mut effect = GainProcessor::new(ProcessorConfig::default()).unwrap();
    let (mut tx, mut rx) = RingBuffer::<AutomationMessage>::new(8);

    tx.push(AutomationMessage::SetValue { id: GAIN_PARAM_ID, value: 0.3 }).unwrap();
    tx.push(AutomationMessage::SetValue { id: GAIN_PARAM_ID, value: 0.25 }).unwrap();
    assert_eq!(effect.process_messages(&mut rx), 0);

    let queue = effect.pending_mut().find(GAIN_PARAM_ID).unwrap();
    assert_eq!(queue.points(), &[Breakpoint::new(0, 0.25)]);

    let mut block = [1.0; 4];
    effect.process(&mut [&mut block[..]], 4);
    assert_eq!(block, [0.25; 4]);
    assert_eq!(effect.gain(), 0.25);
}

#[test]
fn scheduled_points_ramp_within_block() {
    let mut effect = GainProcessor::new(ProcessorConfig::default()).unwrap();
    let (mut tx, mut rx) = RingBuffer::<AutomationMessage>::new(8);

    for point in [Breakpoint::new(0, 0.0), Breakpoint::new(2, 1.0)] {
        tx.push(AutomationMessage::Breakpoint { id: GAIN_PARAM_ID, point }).unwrap();
    }
    effect.process_messages(&mut rx);

    let mut block = [1.0; 4];
    effect.process(&mut [&mut block[..]], 4);
    assert_eq!(block, [0.0, 0.5, 1.0, 1.0]);
}

#[test]
fn rejected_messages_are_counted() {
    let config = ProcessorConfig::default().max_points_per_block(1);
    let mut effect = GainProcessor::new(config).unwrap();
    let (mut tx, mut rx) = RingBuffer::<AutomationMessage>::new(8);

    // Second is out of order, third overflows the one-point queue.
    for (offset, value) in [(4, 0.1), (2, 0.2), (8, 0.3)] {
        let point = Breakpoint::new(offset, value);
        tx.push(AutomationMessage::Breakpoint { id: GAIN_PARAM_ID, point }).unwrap();
    }

    assert_eq!(effect.process_messages(&mut rx), 2);
}

#[test]
fn reset_message_restores_initial_gain() {
    let mut effect = GainProcessor::new(ProcessorConfig::default().initial_gain(0.8)).unwrap();
    effect.set_gain(0.1);
    let (mut tx, mut rx) = RingBuffer::<AutomationMessage>::new(4);

    tx.push(AutomationMessage::SetValue { id: GAIN_PARAM_ID, value: 0.5 }).unwrap();
    tx.push(AutomationMessage::Reset).unwrap();
    effect.process_messages(&mut rx);

    assert_eq!(effect.gain(), 0.8);
    assert!(effect.pending_mut().is_empty());

    let mut block = [1.0; 2];
    effect.process(&mut [&mut block[..]], 2);
    assert_eq!(block, [0.8; 2]);
}

#[test]
fn empty_source_block_keeps_seed() {
    let mut out = [0.0; 3];
    assert_eq!(ramp_block(NoPoints, 0.9, &mut out), 0.9);
    assert_eq!(out, [0.9; 3]);
}
