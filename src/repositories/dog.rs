use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::models::{Dog, NewDog};
use crate::utils::short_id;

/// 进程启动时写入的种子数据
const SEED_DOGS: [(&str, f64); 2] = [("Captain", 25.0), ("Doggo", 13.0)];

/// 存储后端自身的故障。内存表不会产生，留给需要 I/O 的后端。
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dog store unavailable: {0}")]
    Unavailable(String),
}

/// dogs 表的存储抽象。查不到记录返回 `Ok(None)`，`Err` 只表示存储本身出错。
pub trait DogStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<Dog>, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Dog>, StoreError>;

    fn create(&self, new_dog: NewDog) -> Result<Dog, StoreError>;

    /// 整行替换 name 和 weight，id 与位置保持不变
    fn update(&self, id: &str, changes: NewDog) -> Result<Option<Dog>, StoreError>;

    fn delete(&self, id: &str) -> Result<Option<Dog>, StoreError>;
}

#[derive(Debug, Default)]
struct DogTable {
    rows: Vec<Dog>,
    // 已发放过的 id，删除后也不回收
    issued: HashSet<String>,
}

impl DogTable {
    // 64^5 个 id 全部发放完之前一定能抽到新值；issued 随创建次数线性增长
    fn next_id(&mut self) -> String {
        loop {
            let id = short_id::generate();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    fn insert(&mut self, new_dog: NewDog) -> Dog {
        let dog = Dog {
            id: self.next_id(),
            name: new_dog.name,
            weight: new_dog.weight,
        };
        self.rows.push(dog.clone());
        dog
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|d| d.id == id)
    }
}

/// 内存版 dogs 表，进程退出即丢失
#[derive(Debug, Default)]
pub struct InMemoryDogStore {
    table: Mutex<DogTable>,
}

impl InMemoryDogStore {
    pub fn seeded() -> Self {
        let mut table = DogTable::default();
        for (name, weight) in SEED_DOGS {
            table.insert(NewDog {
                name: name.to_string(),
                weight,
            });
        }
        Self {
            table: Mutex::new(table),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().rows.len()
    }

    /// 每个操作都在持锁期间一次写完，panic 不会留下写了一半的行，
    /// 因此锁中毒时直接接管并清除中毒标记。
    fn lock(&self) -> MutexGuard<'_, DogTable> {
        self.table.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Dogs table lock was poisoned, recovering");
            self.table.clear_poison();
            PoisonError::into_inner(poisoned)
        })
    }
}

impl DogStore for InMemoryDogStore {
    fn find_all(&self) -> Result<Vec<Dog>, StoreError> {
        Ok(self.lock().rows.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Dog>, StoreError> {
        Ok(self.lock().rows.iter().find(|d| d.id == id).cloned())
    }

    fn create(&self, new_dog: NewDog) -> Result<Dog, StoreError> {
        Ok(self.lock().insert(new_dog))
    }

    fn update(&self, id: &str, changes: NewDog) -> Result<Option<Dog>, StoreError> {
        let mut table = self.lock();
        let Some(idx) = table.position(id) else {
            return Ok(None);
        };

        let row = &mut table.rows[idx];
        row.name = changes.name;
        row.weight = changes.weight;
        Ok(Some(row.clone()))
    }

    fn delete(&self, id: &str) -> Result<Option<Dog>, StoreError> {
        let mut table = self.lock();
        Ok(table.position(id).map(|idx| table.rows.remove(idx)))
    }
}
