//! Timestamp gap analysis.
//!
//! Cross-references consecutive video tag timestamps against the framerate
//! declared in the metadata. A gap wider than twice the expected per-frame
//! interval is flagged on the later tag with an estimate of how many frames
//! went missing.

use tracing::debug;

use crate::file::FlvFile;

/// Annotates video tags whose timestamp jumps ahead of the declared
/// framerate. Runs only when the metadata carries a positive `framerate`
/// number; annotations land exclusively on video tags.
pub fn annotate_timestamp_gaps(file: &mut FlvFile) {
    let Some(framerate) = file
        .metadata_value("framerate")
        .and_then(|value| value.as_number())
    else {
        return;
    };

    if framerate <= 0.0 {
        return;
    }

    let expected_ms = 1000.0 / framerate;
    let threshold_ms = 2.0 * expected_ms;

    let mut previous_timestamp: Option<u32> = None;
    let mut flagged = 0u32;

    for tag in file.tags.iter_mut().filter(|tag| tag.is_video()) {
        if let Some(previous) = previous_timestamp {
            // Signed domain: spliced or edited streams can step backwards,
            // and that must not wrap into a huge unsigned gap.
            let gap = tag.timestamp_ms as i64 - previous as i64;

            if gap >= 0 && gap as f64 > threshold_ms {
                let dropped = (gap as f64 / expected_ms).round() as i64 - 1;
                if dropped > 0 {
                    tag.analysis = Some(format!(
                        "Timestamp jump of {gap}ms. Possible {dropped} dropped frames."
                    ));
                    flagged += 1;
                }
            }
        }

        previous_timestamp = Some(tag.timestamp_ms);
    }

    if flagged > 0 {
        debug!(framerate, flagged, "timestamp analysis flagged video tags");
    }
}

#[cfg(test)]
mod tests {
    use amf0::Amf0Value;
    use bytes::Bytes;

    use crate::parser::FlvParser;
    use crate::test_utils::*;

    fn parse_with_framerate(framerate: f64, video_timestamps: &[u32]) -> crate::FlvFile {
        let mut buf = file_prelude(true, true);
        let metadata = vec![("framerate".to_string(), Amf0Value::Number(framerate))];
        append_script_tag(&mut buf, 0, "onMetaData", &metadata);
        for &timestamp in video_timestamps {
            append_tag(&mut buf, 9, timestamp, &video_payload(1, 7));
        }
        FlvParser::parse(Bytes::from(buf), "analysis.flv").unwrap()
    }

    #[test]
    fn test_dropped_frame_detection() {
        // 25 fps: expected interval 40ms, threshold 80ms.
        let file = parse_with_framerate(25.0, &[0, 160]);

        let video_tags: Vec<_> = file.tags.iter().filter(|t| t.is_video()).collect();
        assert_eq!(video_tags[0].analysis, None);
        assert_eq!(
            video_tags[1].analysis.as_deref(),
            Some("Timestamp jump of 160ms. Possible 3 dropped frames.")
        );
    }

    #[test]
    fn test_regular_cadence_is_clean() {
        let file = parse_with_framerate(25.0, &[0, 40, 80, 120]);
        assert!(file.tags.iter().all(|tag| tag.analysis.is_none()));
    }

    #[test]
    fn test_gap_at_threshold_is_clean() {
        // Exactly 2x the interval is not beyond the threshold.
        let file = parse_with_framerate(25.0, &[0, 80]);
        assert!(file.tags.iter().all(|tag| tag.analysis.is_none()));
    }

    #[test]
    fn test_backwards_timestamp_is_skipped() {
        let file = parse_with_framerate(25.0, &[4000, 0, 40]);
        assert!(file.tags.iter().all(|tag| tag.analysis.is_none()));
    }

    #[test]
    fn test_no_framerate_no_analysis() {
        let mut buf = file_prelude(true, true);
        append_tag(&mut buf, 9, 0, &video_payload(1, 7));
        append_tag(&mut buf, 9, 5000, &video_payload(2, 7));

        let file = FlvParser::parse(Bytes::from(buf), "no-meta.flv").unwrap();
        assert!(file.tags.iter().all(|tag| tag.analysis.is_none()));
    }

    #[test]
    fn test_non_positive_framerate_no_analysis() {
        let file = parse_with_framerate(0.0, &[0, 5000]);
        assert!(file.tags.iter().all(|tag| tag.analysis.is_none()));
    }

    #[test]
    fn test_audio_tags_do_not_break_video_pairing() {
        let mut buf = file_prelude(true, true);
        let metadata = vec![("framerate".to_string(), Amf0Value::Number(25.0))];
        append_script_tag(&mut buf, 0, "onMetaData", &metadata);
        append_tag(&mut buf, 9, 0, &video_payload(1, 7));
        // Interleaved audio must not reset the video cadence check.
        append_tag(&mut buf, 8, 20, &[0x2F, 0x00]);
        append_tag(&mut buf, 9, 160, &video_payload(2, 7));

        let file = FlvParser::parse(Bytes::from(buf), "interleaved.flv").unwrap();
        let video_tags: Vec<_> = file.tags.iter().filter(|t| t.is_video()).collect();
        assert!(video_tags[1].analysis.is_some());
        // Analysis only ever lands on video tags.
        assert!(file
            .tags
            .iter()
            .filter(|t| !t.is_video())
            .all(|t| t.analysis.is_none()));
    }
}
