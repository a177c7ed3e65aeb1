//! Media device restriction injected into server surfaces.
//!
//! Device ids differ between isolated web engine profiles, so preferences
//! are stored and matched by device label. The script is baked in at
//! creation; changing preferences requires recreating the surface.

use shoal_common::DevicePreferences;

const TEMPLATE: &str = r#"
(function () {
  var md = navigator.mediaDevices;
  if (!md) return;
  var MIC = __SHOAL_MIC__;
  var CAM = __SHOAL_CAM__;
  var SPEAKER = __SHOAL_SPEAKER__;

  var listAll = md.enumerateDevices.bind(md);
  function idForLabel(kind, label) {
    return listAll().then(function (all) {
      var hit = all.find(function (d) { return d.kind === kind && d.label === label; });
      return hit ? hit.deviceId : null;
    });
  }
  function pin(track, id) {
    var base = typeof track === 'object' ? track : {};
    return Object.assign({}, base, { deviceId: { exact: id } });
  }

  var getUserMedia = md.getUserMedia.bind(md);
  md.getUserMedia = function (constraints) {
    var c = constraints ? JSON.parse(JSON.stringify(constraints)) : {};
    var pending = [];
    if (MIC && c.audio) {
      pending.push(idForLabel('audioinput', MIC).then(function (id) { if (id) c.audio = pin(c.audio, id); }));
    }
    if (CAM && c.video) {
      pending.push(idForLabel('videoinput', CAM).then(function (id) { if (id) c.video = pin(c.video, id); }));
    }
    return Promise.all(pending).then(function () { return getUserMedia(c); });
  };

  md.enumerateDevices = function () {
    return listAll().then(function (all) {
      return all.filter(function (d) {
        if (!d.deviceId || !d.label) return true;
        if (d.kind === 'audioinput') return !MIC || d.deviceId === 'default' || d.label === MIC;
        if (d.kind === 'videoinput') return !CAM || d.label === CAM;
        if (d.kind === 'audiooutput') return !SPEAKER || d.deviceId === 'default' || d.label === SPEAKER;
        return true;
      });
    });
  };

  if (!SPEAKER) return;
  var sinkId = null;
  idForLabel('audiooutput', SPEAKER).then(function (id) { sinkId = id; });
  function applySink(el) {
    if (!el.setSinkId || el.__shoalSink) return;
    el.__shoalSink = true;
    el.setSinkId(sinkId || SPEAKER).catch(function () {});
  }
  new MutationObserver(function (records) {
    records.forEach(function (r) {
      r.addedNodes.forEach(function (n) {
        if (n.nodeType !== 1) return;
        if (n.tagName === 'AUDIO' || n.tagName === 'VIDEO') applySink(n);
        if (n.querySelectorAll) n.querySelectorAll('audio,video').forEach(applySink);
      });
    });
  }).observe(document.documentElement, { subtree: true, childList: true });
  document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('audio,video').forEach(applySink);
  });
})();
"#;

/// Build the initialization script for `prefs`.
///
/// Returns `None` when no device is selected, so unrestricted surfaces get
/// no patching at all. Labels are embedded as JSON string literals.
pub fn device_restriction_script(prefs: &DevicePreferences) -> Option<String> {
    if prefs.is_unrestricted() {
        return None;
    }
    Some(
        TEMPLATE
            .replace("__SHOAL_MIC__", &js_string(prefs.mic_id.as_deref()))
            .replace("__SHOAL_CAM__", &js_string(prefs.cam_id.as_deref()))
            .replace("__SHOAL_SPEAKER__", &js_string(prefs.speaker_id.as_deref())),
    )
}

fn js_string(label: Option<&str>) -> String {
    serde_json::to_string(label.unwrap_or("")).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_preferences_inject_nothing() {
        assert!(device_restriction_script(&DevicePreferences::default()).is_none());
    }

    #[test]
    fn labels_are_embedded() {
        let script = device_restriction_script(&DevicePreferences {
            mic_id: Some("USB Microphone".into()),
            cam_id: None,
            speaker_id: Some("Headphones".into()),
        })
        .unwrap();
        assert!(script.contains(r#"var MIC = "USB Microphone";"#));
        assert!(script.contains(r#"var CAM = "";"#));
        assert!(script.contains(r#"var SPEAKER = "Headphones";"#));
        assert!(!script.contains("__SHOAL_"));
    }

    #[test]
    fn labels_are_escaped() {
        let script = device_restriction_script(&DevicePreferences {
            mic_id: Some("Mic \"Pro\"\n</script>".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(script.contains(r#"var MIC = "Mic \"Pro\"\n</script>";"#));
    }

    #[test]
    fn same_preferences_give_same_script() {
        let prefs = DevicePreferences {
            cam_id: Some("FaceTime HD".into()),
            ..Default::default()
        };
        assert_eq!(
            device_restriction_script(&prefs),
            device_restriction_script(&prefs.clone())
        );
    }
}
