use cfg_format::parse;
use devmap_core::{
    resolve_banks, unmapped_parameters, DeviceConfig, DeviceDescriptor, ParameterInfo,
};
use pretty_assertions::assert_eq;

fn device(names: &[&str]) -> DeviceDescriptor {
    DeviceDescriptor {
        class_name: "PluginDevice".to_string(),
        class_display_name: Some("TestComp".to_string()),
        name: "TestComp".to_string(),
        parameters: names.iter().map(|n| ParameterInfo::new(*n)).collect(),
    }
}

fn config(text: &str) -> DeviceConfig {
    DeviceConfig::from_document(&parse(text).unwrap()).unwrap()
}

#[test]
fn test_resolve_follows_config_order_not_device_order() {
    let device = device(&["Device On", "Attack", "Release", "Threshold"]);
    let config = config(
        "[Banks]\n[[Main]]\nThreshold = \nAttack = \n[[Extra]]\nRelease = \n",
    );

    let resolution = resolve_banks(&device, &config);
    let bank_names: Vec<&str> = resolution.banks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(bank_names, vec!["Main", "Extra"]);

    let main: Vec<&str> = resolution.banks[0]
        .parameters
        .iter()
        .map(|p| p.original_name.as_str())
        .collect();
    assert_eq!(main, vec!["Threshold", "Attack"]);
}

#[test]
fn test_resolve_writes_all_three_overrides() {
    let device = device(&["Device On", "DryWetMix", "Mode"]);
    let config = config(
        "[Banks]\n[[Bank 1]]\nDryWetMix = *\nMode = Filter Mode\n\
         [ParameterValues]\nMode = LP||0.0, HP||1.0\n",
    );

    let resolution = resolve_banks(&device, &config);
    let bank = &resolution.banks[0];

    assert_eq!(bank.parameters[0].display_name, "Dry Wet Mix");
    assert_eq!(bank.parameters[0].value_list, None);
    assert_eq!(bank.parameters[0].start_points, None);

    assert_eq!(bank.parameters[1].display_name, "Filter Mode");
    assert_eq!(
        bank.parameters[1].value_list,
        Some(vec!["LP".to_string(), "HP".to_string()])
    );
    assert_eq!(bank.parameters[1].start_points, Some(vec![0.0, 1.0]));
}

#[test]
fn test_values_keyed_by_token_not_original_name() {
    let device = device(&["Device On", "Mode"]);
    // Token `1_Mode` matches the parameter via its numeric prefix; the
    // value list is looked up under the token as written.
    let config = config(
        "[Banks]\n[[Bank 1]]\n1_Mode = \n\
         [ParameterValues]\n1_Mode = A, B\nMode = X, Y\n",
    );

    let resolution = resolve_banks(&device, &config);
    assert_eq!(
        resolution.banks[0].parameters[0].value_list,
        Some(vec!["A".to_string(), "B".to_string()])
    );
}

#[test]
fn test_unmatched_tokens_dropped_silently() {
    let device = device(&["Device On", "Gain"]);
    let config = config("[Banks]\n[[Bank 1]]\nGain = \nGhost = \n");

    let resolution = resolve_banks(&device, &config);
    assert_eq!(resolution.banks[0].parameters.len(), 1);
    assert!(resolution.used_names.contains("Gain"));
    assert!(!resolution.used_names.contains("Ghost"));
}

#[test]
fn test_used_names_are_bare_original_names() {
    let device = device(&["Device On", "Gain", "Mix"]);
    let config = config("[Banks]\n[[Bank 1]]\n2_Mix = \n");

    let resolution = resolve_banks(&device, &config);
    assert!(resolution.used_names.contains("Mix"));
    assert_eq!(unmapped_parameters(&device, &resolution.used_names), vec!["Gain"]);
}

#[test]
fn test_unmapped_is_sorted_and_excludes_enable() {
    let device = device(&["Device On", "Zeta", "Alpha", "Mid"]);
    let resolution = resolve_banks(&device, &config("[Banks]\n"));

    assert!(resolution.used_names.is_empty());
    assert_eq!(
        unmapped_parameters(&device, &resolution.used_names),
        vec!["Alpha", "Mid", "Zeta"]
    );
}

#[test]
fn test_resolution_independent_of_unrelated_banks() {
    let device = device(&["Device On", "Cutoff", "Resonance"]);

    let lone = config("[Banks]\n[[A]]\nCutoff = \n");
    let with_noise = config("[Banks]\n[[Z]]\nResonance = \n[[A]]\nCutoff = \n");

    let lone_res = resolve_banks(&device, &lone);
    let noisy_res = resolve_banks(&device, &with_noise);

    let find = |res: &devmap_core::Resolution| {
        res.banks
            .iter()
            .find(|b| b.name == "A")
            .unwrap()
            .parameters
            .clone()
    };
    assert_eq!(find(&lone_res), find(&noisy_res));
}
