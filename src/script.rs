//! Rendering of the complete SCVMM clone script.
//!
//! The executor runs this script on the VMM server. It combines the
//! compiled [`CloneTaskParameters`] with the template being cloned.

use crate::clone::CloneTaskParameters;
use crate::directive::{DirectiveBuilder, quote};
use crate::request::TemplateRef;

/// Renders the PowerShell script that performs the clone.
///
/// The script stops on the first error, creates the virtual machine from
/// `template` on the target host, applies the network binding if any, and
/// prints the new virtual machine's id as JSON.
pub fn render_clone_script(params: &CloneTaskParameters, template: &TemplateRef) -> String {
    let mut new_vm = DirectiveBuilder::new();
    new_vm.push_quoted("Name", Some(params.name.as_str()));
    new_vm.push_variable("VMHost", "VMHost");
    new_vm.push_quoted("Path", params.mount_point.as_deref());
    new_vm.push_variable("VMTemplate", "Template");

    let mut script = vec![
        "$ErrorActionPreference = 'Stop'; ".to_string(),
        "Import-Module VirtualMachineManager | Out-Null; ".to_string(),
        format!("$VMHost = Get-SCVMHost -ID {}; ", quote(&params.host.ems_ref)),
        format!("$Template = Get-SCVMTemplate -ID {}; ", quote(&template.ems_ref)),
        format!(
            "$VM = New-SCVirtualMachine {}{}; ",
            new_vm.into_directive().render(),
            params.cpu_script
        ),
    ];

    if let Some(network) = &params.network_script {
        script.push(network.clone());
    }

    script.push("$VM | Select-Object ID | ConvertTo-Json".to_string());
    script.concat()
}
