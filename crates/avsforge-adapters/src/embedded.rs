//! Embedded default template bodies.
//!
//! Every [`TemplateName`] has a compiled-in default here. These are the
//! fallback tier of [`BundledResources`](crate::resources::BundledResources):
//! when the bundled copy of a template is missing or unreadable, the
//! generator degrades to these bodies instead of failing. A binary shipped
//! without a `templates/` directory therefore still produces a working
//! project.
//!
//! The two `package.json` bodies keep their `{{projectName}}` /
//! `{{description}}` placeholders — rendering happens downstream, never
//! here.

use avsforge_core::domain::TemplateName;

/// Look up the embedded default body for a template.
pub fn default_body(name: TemplateName) -> &'static str {
    match name {
        TemplateName::RootPackageJson => ROOT_PACKAGE_JSON,
        TemplateName::HardhatConfig => HARDHAT_CONFIG,
        TemplateName::DeployScript => DEPLOY_SCRIPT,
        TemplateName::TaskMailboxTest => TASK_MAILBOX_TEST,
        TemplateName::TaskMailboxContract => TASK_MAILBOX,
        TemplateName::TaskAvsRegistrarContract => TASK_AVS_REGISTRAR,
        TemplateName::SlashingConditionsContract => SLASHING_CONDITIONS,
        TemplateName::OffchainPackageJson => OFFCHAIN_PACKAGE_JSON,
        TemplateName::AggregatorStub => AGGREGATOR_STUB,
        TemplateName::ExecutorStub => EXECUTOR_STUB,
    }
}

pub const ROOT_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "0.1.0",
  "description": "{{description}}",
  "scripts": {
    "build": "hardhat compile",
    "test": "hardhat test",
    "deploy": "hardhat run scripts/deploy.ts"
  },
  "devDependencies": {
    "@nomicfoundation/hardhat-toolbox": "^5.0.0",
    "hardhat": "^2.22.0",
    "ts-node": "^10.9.0",
    "typescript": "^5.4.0"
  }
}
"#;

pub const HARDHAT_CONFIG: &str = r#"import { HardhatUserConfig } from "hardhat/config";
import "@nomicfoundation/hardhat-toolbox";

const config: HardhatUserConfig = {
  solidity: "0.8.24",
  networks: {
    holesky: {
      url: process.env.RPC_URL ?? "",
      accounts: process.env.PRIVATE_KEY ? [process.env.PRIVATE_KEY] : [],
    },
  },
};

export default config;
"#;

pub const DEPLOY_SCRIPT: &str = r#"import { ethers } from "hardhat";

async function main() {
  const mailbox = await ethers.deployContract("TaskMailbox");
  await mailbox.waitForDeployment();
  console.log(`TaskMailbox deployed to ${mailbox.target}`);

  const registrar = await ethers.deployContract("TaskAVSRegistrar");
  await registrar.waitForDeployment();
  console.log(`TaskAVSRegistrar deployed to ${registrar.target}`);

  const slashing = await ethers.deployContract("SlashingConditions");
  await slashing.waitForDeployment();
  console.log(`SlashingConditions deployed to ${slashing.target}`);
}

main().catch((error) => {
  console.error(error);
  process.exitCode = 1;
});
"#;

pub const TASK_MAILBOX_TEST: &str = r#"import { expect } from "chai";
import { ethers } from "hardhat";

describe("TaskMailbox", () => {
  it("accepts a new task", async () => {
    const mailbox = await ethers.deployContract("TaskMailbox");
    await mailbox.createTask("0x1234");
    expect(await mailbox.taskCount()).to.equal(1n);
  });
});
"#;

pub const TASK_MAILBOX: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.24;

contract TaskMailbox {
    struct Task {
        bytes payload;
        address creator;
        bool completed;
    }

    Task[] public tasks;

    event TaskCreated(uint256 indexed taskId, address indexed creator);
    event TaskCompleted(uint256 indexed taskId, bytes result);

    function createTask(bytes calldata payload) external returns (uint256 taskId) {
        tasks.push(Task({payload: payload, creator: msg.sender, completed: false}));
        taskId = tasks.length - 1;
        emit TaskCreated(taskId, msg.sender);
    }

    function submitResult(uint256 taskId, bytes calldata result) external {
        tasks[taskId].completed = true;
        emit TaskCompleted(taskId, result);
    }

    function taskCount() external view returns (uint256) {
        return tasks.length;
    }
}
"#;

pub const TASK_AVS_REGISTRAR: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.24;

contract TaskAVSRegistrar {
    mapping(address => bool) public registered;

    event OperatorRegistered(address indexed operator);
    event OperatorDeregistered(address indexed operator);

    function registerOperator() external {
        registered[msg.sender] = true;
        emit OperatorRegistered(msg.sender);
    }

    function deregisterOperator() external {
        registered[msg.sender] = false;
        emit OperatorDeregistered(msg.sender);
    }
}
"#;

pub const SLASHING_CONDITIONS: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.24;

contract SlashingConditions {
    event SlashingProposed(address indexed operator, string reason);

    function proposeSlashing(address operator, string calldata reason) external {
        emit SlashingProposed(operator, reason);
    }
}
"#;

pub const OFFCHAIN_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}-off-chain",
  "version": "0.1.0",
  "type": "module",
  "dependencies": {
    "dotenv": "^16.4.0",
    "ethers": "^6.13.0"
  }
}
"#;

pub const AGGREGATOR_STUB: &str = r#"export class Aggregator {
  async start(): Promise<void> {
    console.log("aggregator started");
  }

  async aggregate(responses: string[]): Promise<string> {
    console.log(`aggregating ${responses.length} responses`);
    return "0x";
  }
}
"#;

pub const EXECUTOR_STUB: &str = r#"export class Executor {
  async start(): Promise<void> {
    console.log("executor started");
  }

  async execute(taskId: number): Promise<string> {
    console.log(`executing task ${taskId}`);
    return "0x";
  }
}
"#;
