//! A script used to generate the CRDs used by this project.
//!
//! Any time a CRD spec changes, this script can be run to ensure that the CRDs are up-to-date and
//! ready to be synced with the cluster.

use anyhow::{Context, Result};
use kube::CustomResourceExt;
use outflow_core::crd::{ClusterFlow, ClusterOutput, Flow, Output};

fn main() -> Result<()> {
    let canon = std::fs::canonicalize("..").context("error getting canonical path of current dir")?;
    let crds_path = canon.join("k8s").join("crds");
    std::fs::create_dir_all(&crds_path).with_context(|| format!("error creating CRD dir {:?}", &crds_path))?;

    let output = Output::crd();
    let output_yaml = serde_yaml::to_string(&output).context("error serializing Output CRD to yaml")?;
    std::fs::write(crds_path.join("output.yaml"), &output_yaml).with_context(|| format!("error writing Output CRD to {:?}", &crds_path))?;
    println!("Output CRD written to {:?}", &crds_path);

    let cluster_output = ClusterOutput::crd();
    let cluster_output_yaml = serde_yaml::to_string(&cluster_output).context("error serializing ClusterOutput CRD to yaml")?;
    std::fs::write(crds_path.join("clusteroutput.yaml"), &cluster_output_yaml)
        .with_context(|| format!("error writing ClusterOutput CRD to {:?}", &crds_path))?;
    println!("ClusterOutput CRD written to {:?}", &crds_path);

    let flow = Flow::crd();
    let flow_yaml = serde_yaml::to_string(&flow).context("error serializing Flow CRD to yaml")?;
    std::fs::write(crds_path.join("flow.yaml"), &flow_yaml).with_context(|| format!("error writing Flow CRD to {:?}", &crds_path))?;
    println!("Flow CRD written to {:?}", &crds_path);

    let cluster_flow = ClusterFlow::crd();
    let cluster_flow_yaml = serde_yaml::to_string(&cluster_flow).context("error serializing ClusterFlow CRD to yaml")?;
    std::fs::write(crds_path.join("clusterflow.yaml"), &cluster_flow_yaml)
        .with_context(|| format!("error writing ClusterFlow CRD to {:?}", &crds_path))?;
    println!("ClusterFlow CRD written to {:?}", &crds_path);

    Ok(())
}
